use strata::{Error, LayoutConfig};

#[test]
fn config_defaults_match_the_classic_view() {
    let c = LayoutConfig::default();
    assert_eq!(c.input_width, 50.0);
    assert_eq!(c.min_edge_separation, 20.0);
    assert_eq!(c.min_output_approach, 15.0);
    assert_eq!(c.bubble_radius, 12.0);
    assert_eq!(c.row_separation, 130.0);
    assert_eq!(c.margin, 50.0);
    assert_eq!(c.arrowhead_height, 7.0);
    assert_eq!(c.min_input_approach(), 39.0);
    c.validate().unwrap();
}

#[test]
fn config_reads_partial_camel_case_json() {
    let c: LayoutConfig =
        serde_json::from_str(r#"{ "inputWidth": 40, "rowSeparation": 80.5 }"#).unwrap();
    assert_eq!(c.input_width, 40.0);
    assert_eq!(c.row_separation, 80.5);
    assert_eq!(c.margin, LayoutConfig::default().margin);

    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["minEdgeSeparation"], 20.0);
    assert_eq!(json["arrowheadHeight"], 7.0);
}

#[test]
fn config_rejects_unusable_values() {
    for c in [
        LayoutConfig {
            input_width: 0.0,
            ..Default::default()
        },
        LayoutConfig {
            input_width: f64::NAN,
            ..Default::default()
        },
        LayoutConfig {
            margin: -1.0,
            ..Default::default()
        },
        LayoutConfig {
            row_separation: f64::INFINITY,
            ..Default::default()
        },
    ] {
        let err = c.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }), "{err}");
    }
}

#[test]
fn config_error_names_the_field() {
    let err = LayoutConfig {
        bubble_radius: -3.0,
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("bubbleRadius"), "{err}");
}
