#[cfg(test)]
mod _tests_scenarios {
    use super::super::chirality::Chirality;
    use super::super::generate::{Structure, generate};
    use super::super::tube_gen::{TubeGen, unit_vectors};
    use crate::config::TubeConfig;
    use crate::error::TubeGenError;
    use crate::interfaces::{BoundaryCondition, Dimension};
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-8;

    #[test]
    fn test_armchair_ribbon_end_to_end() {
        let config = TubeConfig::new(Chirality::new(4, 4).unwrap(), 2)
            .with_boundary_conditions(BoundaryCondition::Periodic, BoundaryCondition::Periodic)
            .with_embedding(Dimension::_2D)
            .with_spacing(1.0);
        let structure = generate(&config).unwrap();
        assert_eq!(structure.dimension(), Dimension::_2D);

        let ribbon = structure.as_ribbon().unwrap();
        let generator = TubeGen::new(config.chirality, 1.0).unwrap();
        assert_eq!(ribbon.len(), 2 * 2 * generator.n_hex_ucell());
        assert_eq!(ribbon.len(), 32);
        assert!(ribbon.iter().all(|site| site.degree() == 3));

        // circumference from an independent computation of 4 a1 + 4 a2
        let (a1, a2) = unit_vectors(1.0);
        let expected = (a1 * 4.0 + a2 * 4.0).norm();
        assert_relative_eq!(generator.circumference(), expected, epsilon = 1e-12);
        assert_relative_eq!(generator.circumference(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zigzag_tube_end_to_end() {
        let config = TubeConfig::new(Chirality::new(5, 0).unwrap(), 3)
            .with_boundary_conditions(BoundaryCondition::Periodic, BoundaryCondition::Open)
            .with_embedding(Dimension::_3D);
        let structure = generate(&config).unwrap();
        let tube = structure.as_tube().unwrap();
        let generator = TubeGen::new(config.chirality, config.spacing).unwrap();
        let luc = generator.n_atoms_ucell();
        assert_eq!(tube.len(), 3 * luc);

        for site in tube {
            let r = site.pos.x.hypot(site.pos.y);
            assert_relative_eq!(r, generator.diameter() / 2.0, epsilon = TOL);
        }

        // both axial ends are cut
        assert!(tube.sites[..luc].iter().any(|site| site.degree() < 3));
        assert!(tube.sites[2 * luc..].iter().any(|site| site.degree() < 3));
    }

    #[test]
    fn test_all_boundary_combinations_are_independent() {
        let chirality = Chirality::new(4, 4).unwrap();
        let mut bond_counts = Vec::new();
        for bc_ch in [BoundaryCondition::Periodic, BoundaryCondition::Open] {
            for bc_t in [BoundaryCondition::Periodic, BoundaryCondition::Open] {
                let config = TubeConfig::new(chirality, 2)
                    .with_boundary_conditions(bc_ch, bc_t)
                    .with_embedding(Dimension::_2D);
                let structure = generate(&config).unwrap();
                bond_counts.push(structure.as_ribbon().unwrap().n_bonds());
            }
        }
        // periodic/periodic keeps the most bonds, open/open the fewest
        let (pp, po, op, oo) = (bond_counts[0], bond_counts[1], bond_counts[2], bond_counts[3]);
        assert_eq!(pp, 3 * 32);
        assert!(po < pp && op < pp);
        assert!(oo < po && oo < op);
        assert_ne!(po, op);
    }

    #[test]
    fn test_name_and_comment_override() {
        let mut config = TubeConfig::new(Chirality::new(3, 1).unwrap(), 1);
        let generated = generate(&config).unwrap();
        assert_eq!(generated.name(), "Tube (3, 1)");
        assert_eq!(generated.comment(), "");

        config.name = "my tube".to_string();
        config.comment = "for testing".to_string();
        let named = generate(&config).unwrap();
        assert_eq!(named.name(), "my tube");
        assert_eq!(named.comment(), "for testing");
        assert_eq!(named.len(), generated.len());
    }

    #[test]
    fn test_invalid_configuration_is_rejected_before_generation() {
        let chirality = Chirality::new(4, 2).unwrap();
        assert_eq!(
            generate(&TubeConfig::new(chirality, 0)),
            Err(TubeGenError::InvalidLength(0))
        );
        assert!(matches!(
            generate(&TubeConfig::new(chirality, 2).with_spacing(-1.0)),
            Err(TubeGenError::InvalidSpacing(_))
        ));

        let degenerate = TubeConfig::new(Chirality { n: 0, m: 0 }, 2);
        assert_eq!(
            degenerate.validate(),
            Err(TubeGenError::InvalidChirality { n: 0, m: 0 })
        );
    }

    #[test]
    fn test_boundary_condition_tokens() {
        for token in ["p", "P", "periodic", "Periodic", "PERIODIC"] {
            assert_eq!(token.parse(), Ok(BoundaryCondition::Periodic));
        }
        for token in ["o", "O", "open", "Open"] {
            assert_eq!(token.parse(), Ok(BoundaryCondition::Open));
        }
        assert_eq!(
            "closed".parse::<BoundaryCondition>(),
            Err(TubeGenError::UnknownBoundaryCondition("closed".to_string()))
        );
        assert_eq!(BoundaryCondition::Open.to_string(), "open");
    }

    #[test]
    fn test_embedding_tokens() {
        assert_eq!("2d".parse(), Ok(Dimension::_2D));
        assert_eq!("3D".parse(), Ok(Dimension::_3D));
        assert_eq!(
            "4d".parse::<Dimension>(),
            Err(TubeGenError::UnknownEmbedding("4d".to_string()))
        );
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: TubeConfig =
            serde_json::from_str(r#"{"chirality": {"n": 6, "m": 5}, "length": 4}"#).unwrap();
        assert_eq!(config, TubeConfig::new(Chirality::new(6, 5).unwrap(), 4));
        assert_eq!(config.bc_ch, BoundaryCondition::Periodic);
        assert_eq!(config.embedding, Dimension::_3D);
        assert_eq!(config.spacing, 1.0);

        let config: TubeConfig = serde_json::from_str(
            r#"{"chirality": {"n": 5, "m": 0}, "length": 1, "bc_t": "open", "embedding": "2d", "spacing": 1.42}"#,
        )
        .unwrap();
        assert_eq!(config.bc_t, BoundaryCondition::Open);
        assert_eq!(config.embedding, Dimension::_2D);
    }

    #[test]
    fn test_structure_serializes_bonds() {
        let config = TubeConfig::new(Chirality::new(2, 2).unwrap(), 1).with_embedding(Dimension::_2D);
        let structure = generate(&config).unwrap();
        let value = serde_json::to_value(&structure).unwrap();

        assert_eq!(value["name"], "Ribbon (2, 2)");
        let sites = value["sites"].as_array().unwrap();
        assert_eq!(sites.len(), 8);
        assert_eq!(sites[0]["neighbours"].as_array().unwrap().len(), 3);
        assert_eq!(sites[0]["hopping"].as_array().unwrap().len(), 3);
        assert_eq!(sites[0]["pos"].as_array().unwrap().len(), 2);
        assert!(matches!(structure, Structure::Ribbon(_)));
    }
}
