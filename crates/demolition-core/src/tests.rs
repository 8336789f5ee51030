#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::{FiringArc, GameConfig};
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::GameEvent;
    use crate::layout::{BuildingLayout, LayoutRef, ObjectKind, StructurePlacement};
    use crate::state::GameStateSnapshot;
    use crate::types::SimTime;

    #[test]
    fn test_player_command_serde_tagged() {
        let json = r#"{"type":"Fire","power":50.0,"angle":45.0}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::Fire {
                power: 50.0,
                angle: 45.0
            }
        );

        let reset: PlayerCommand = serde_json::from_str(r#"{"type":"Reset"}"#).unwrap();
        assert_eq!(reset, PlayerCommand::Reset);
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::FireBlocked,
            GameEvent::BlockDamaged {
                entity: 7,
                hit_count: 1,
                max_hits: 4,
                cause: DamageCause::Blast,
            },
            GameEvent::Explosion {
                x: 1.0,
                y: 2.0,
                radius: 100.0,
                origin: None,
            },
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, back);
        }
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\":\"NotStarted\""));
    }

    #[test]
    fn test_entity_kind_flags() {
        assert!(EntityKind::Ground.is_static());
        assert!(EntityKind::Catapult.is_static());
        assert!(!EntityKind::Block.is_static());
        assert!(!EntityKind::Projectile.is_static());
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Config ----

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{"max_hits_per_block": 8}"#).unwrap();
        assert_eq!(config.max_hits_per_block, 8);
        assert_eq!(config.bomb_budget, 5);
        assert_eq!(config.fuse_policy, FusePolicy::Detonate);
    }

    #[test]
    fn test_config_rejects_zero_threshold() {
        let err = GameConfig::from_json_str(r#"{"max_hits_per_block": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let err = GameConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_rejects_inverted_power_range() {
        let mut config = GameConfig::default();
        config.power_range.min = 80.0;
        config.power_range.max = 20.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_non_finite_tuning() {
        let config = GameConfig {
            explosion_radius: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            launch_impulse_per_power: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let huge = GameConfig {
            explosion_radius: 1e12,
            ..Default::default()
        };
        assert!(huge.validate().is_ok(), "large but finite radius is allowed");
    }

    #[test]
    fn test_default_placements_follow_tower_size() {
        let config = GameConfig {
            tower_width: 6,
            tower_height: 2,
            ..Default::default()
        };
        let placements = config.placements();
        assert_eq!(placements.len(), 2);
        assert_eq!(
            placements[0].layout,
            LayoutRef::Tower {
                width: 6,
                height: 2
            }
        );
    }

    #[test]
    fn test_explicit_placements_override_defaults() {
        let config = GameConfig {
            structures: Some(vec![StructurePlacement {
                layout: LayoutRef::Named {
                    name: "pagoda".into(),
                },
                anchor_x: 600.0,
            }]),
            ..Default::default()
        };
        assert_eq!(config.placements().len(), 1);
    }

    #[test]
    fn test_firing_arc_wraps() {
        let arc = FiringArc {
            min_deg: -90.0,
            max_deg: 0.0,
        };
        assert!(arc.contains(-45.0));
        assert!(arc.contains(315.0));
        assert!(!arc.contains(45.0));

        let full = FiringArc {
            min_deg: 0.0,
            max_deg: 360.0,
        };
        assert!(full.contains(181.0));
    }

    #[test]
    fn test_power_clamped_to_range() {
        let config = GameConfig::default();
        assert_eq!(config.clamp_power(500.0), 100.0);
        assert_eq!(config.clamp_power(1.0), 10.0);
        assert_eq!(config.clamp_power(50.0), 50.0);
    }

    #[test]
    fn test_playfield_outside() {
        let config = GameConfig::default();
        let field = config.playfield;
        assert!(!field.is_outside(500.0, 300.0, 100.0));
        assert!(!field.is_outside(-50.0, 300.0, 100.0));
        assert!(field.is_outside(-150.0, 300.0, 100.0));
        assert!(field.is_outside(500.0, -101.0, 100.0));
    }

    // ---- Layout ----

    #[test]
    fn test_layout_from_json() {
        let json = r#"{
            "name": "hut",
            "grid": [[0, 2, 0], [1, 1, 1]],
            "objects": [{"kind": "character", "col": 1, "row": 1, "width": 1, "height": 1}],
            "cell_types": {"1": {"material": "Wall"}, "2": {"material": "Roof"}}
        }"#;
        let layout = BuildingLayout::from_json_str(json).unwrap();
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.cols(), 3);
        assert_eq!(layout.objects[0].kind, ObjectKind::Character);
        assert!(layout.objects[0].covers(1, 1));
        assert!(!layout.objects[0].covers(0, 1));
        assert_eq!(layout.cell_types[&2].material, Material::Roof);
    }

    #[test]
    fn test_inline_layout_in_config() {
        let json = r#"{
            "structures": [{
                "anchor_x": 600.0,
                "layout": {
                    "type": "Inline",
                    "layout": {
                        "name": "shed",
                        "grid": [[1, 1]],
                        "cell_types": {"1": {"material": "Wall"}}
                    }
                }
            }]
        }"#;
        let config = GameConfig::from_json_str(json).unwrap();
        let placements = config.placements();
        assert_eq!(placements.len(), 1);
        match &placements[0].layout {
            LayoutRef::Inline { layout } => {
                assert_eq!(layout.name, "shed");
                assert!(layout.objects.is_empty());
            }
            other => panic!("expected inline layout, got {other:?}"),
        }
    }
}
