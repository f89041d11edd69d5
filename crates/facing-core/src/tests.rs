#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::commands::ViewCommand;
    use crate::config::FacingConfig;
    use crate::enums::*;
    use crate::error::FacingError;
    use crate::events::FrameEvent;
    use crate::state::{FrameSnapshot, SpriteView};
    use crate::types::{CameraView, FrameTime, SpriteHandle, SpriteId};

    #[test]
    fn test_cardinal_from_canonical_yaws() {
        for cardinal in Cardinal::ALL {
            assert_eq!(Cardinal::from_yaw_deg(cardinal.yaw_deg()), Some(cardinal));
        }
    }

    #[test]
    fn test_cardinal_boundaries() {
        // East owns [315, 405) after wrapping into [45, 405), plus the 45° edge.
        assert_eq!(Cardinal::from_yaw_deg(44.9), Some(Cardinal::East));
        assert_eq!(Cardinal::from_yaw_deg(45.0), Some(Cardinal::East));
        assert_eq!(Cardinal::from_yaw_deg(45.1), Some(Cardinal::North));
        assert_eq!(Cardinal::from_yaw_deg(134.9), Some(Cardinal::North));
        assert_eq!(Cardinal::from_yaw_deg(135.0), Some(Cardinal::West));
        assert_eq!(Cardinal::from_yaw_deg(225.0), Some(Cardinal::West));
        assert_eq!(Cardinal::from_yaw_deg(225.1), Some(Cardinal::South));
        assert_eq!(Cardinal::from_yaw_deg(314.9), Some(Cardinal::South));
        assert_eq!(Cardinal::from_yaw_deg(315.0), Some(Cardinal::East));
    }

    #[test]
    fn test_cardinal_wraps_any_turn() {
        assert_eq!(Cardinal::from_yaw_deg(-90.0), Some(Cardinal::South));
        assert_eq!(Cardinal::from_yaw_deg(450.0), Some(Cardinal::North));
        assert_eq!(Cardinal::from_yaw_deg(-180.0), Some(Cardinal::West));
        assert_eq!(Cardinal::from_yaw_deg(720.0), Some(Cardinal::East));
    }

    #[test]
    fn test_cardinal_non_finite_yaw() {
        assert_eq!(Cardinal::from_yaw_deg(f64::NAN), None);
        assert_eq!(Cardinal::from_yaw_deg(f64::INFINITY), None);
    }

    #[test]
    fn test_cardinal_suffixes() {
        assert_eq!(Cardinal::from_suffix("E"), Some(Cardinal::East));
        assert_eq!(Cardinal::from_suffix("S"), Some(Cardinal::South));
        assert_eq!(Cardinal::from_suffix("e"), None);
        assert_eq!(Cardinal::from_suffix("NE"), None);
    }

    #[test]
    fn test_pose_names() {
        assert_eq!(PoseMode::Walk.pose_name(Cardinal::East), "walk.E");
        assert_eq!(PoseMode::Idle.pose_name(Cardinal::South), "idle.S");
        assert_eq!(PoseMode::default(), PoseMode::Idle);
    }

    #[test]
    fn test_camera_rotate_wraps() {
        let mut camera = CameraView::new(350.0);
        camera.rotate(20.0);
        assert_relative_eq!(camera.direction_deg, 10.0, epsilon = 1e-9);
        camera.rotate(-30.0);
        assert_relative_eq!(camera.direction_deg, 340.0, epsilon = 1e-9);
    }

    #[test]
    fn test_frame_time_advance() {
        let mut time = FrameTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert_relative_eq!(time.elapsed_secs, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_config_defaults_and_partial_json() {
        let config = FacingConfig::from_json_str("{}").unwrap();
        assert_eq!(config, FacingConfig::default());

        let config =
            FacingConfig::from_json_str(r#"{"nan_policy":"reject","seed":7}"#).unwrap();
        assert_eq!(config.nan_policy, NanPolicy::Reject);
        assert_eq!(config.seed, 7);
        assert_eq!(config.camera_direction_deg, 0.0);
    }

    #[test]
    fn test_config_rejects_bad_json() {
        let err = FacingConfig::from_json_str(r#"{"nan_policy":"explode"}"#).unwrap_err();
        assert!(matches!(err, FacingError::Config(_)));
    }

    #[test]
    fn test_command_wire_format() {
        let cmd = ViewCommand::SetFacing {
            sprite_id: SpriteId(3),
            direction_deg: 45.0,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"type":"SetFacing","sprite_id":3,"direction_deg":45.0}"#);

        let back: ViewCommand =
            serde_json::from_str(r#"{"type":"SetPoseMode","sprite_id":1,"mode":"walk"}"#)
                .unwrap();
        assert_eq!(
            back,
            ViewCommand::SetPoseMode {
                sprite_id: SpriteId(1),
                mode: PoseMode::Walk
            }
        );
    }

    #[test]
    fn test_cardinal_serializes_as_suffix() {
        assert_eq!(serde_json::to_string(&Cardinal::West).unwrap(), r#""W""#);
    }

    #[test]
    fn test_snapshot_lookup_and_serde() {
        let snapshot = FrameSnapshot {
            sprites: vec![SpriteView {
                sprite_id: SpriteId(2),
                name: "guard".into(),
                sprite: Some(SpriteHandle(17)),
                view_index: Some(4),
                pose: None,
                facing_deg: Some(180.0),
            }],
            events: vec![FrameEvent::PoseChanged {
                sprite_id: SpriteId(2),
                pose: "idle.W".into(),
            }],
            ..Default::default()
        };
        assert_eq!(snapshot.sprite(SpriteId(2)).unwrap().sprite, Some(SpriteHandle(17)));
        assert!(snapshot.sprite(SpriteId(9)).is_none());

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sprites, snapshot.sprites);
        assert_eq!(back.events, snapshot.events);
    }
}
