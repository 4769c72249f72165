use eumap::{normalize, Color, ColorLiteral, MapError, OutOfRangePolicy, Palette, PaletteOptions, TerritoryTable};

fn palette(options: &PaletteOptions) -> Palette {
    Palette::new(&TerritoryTable::eu(), options).unwrap()
}

#[test]
fn two_country_scenario() {
    let palette = palette(&PaletteOptions::new(["Germany", "France"], [0.1, 0.9]).with_count_colors(2));

    assert_eq!(palette.breakpoints(), &[0.0, 0.5, 1.0]);
    assert_eq!(palette.interior_breakpoints(), &[0.5]);
    assert_eq!(palette.bin_of("Germany"), Some(0));
    assert_eq!(palette.bin_of("France"), Some(1));
    assert_eq!(palette.labels(), &["[0, 0.5)".to_string(), "[0.5, 1]".to_string()]);
}

#[test]
fn bins_labels_and_colors_match_count() {
    for count in 2..=10 {
        let palette = palette(&PaletteOptions::default().with_range(-3.0, 7.0).with_count_colors(count));
        assert_eq!(palette.labels().len(), count);
        assert_eq!(palette.colors().len(), count);

        let interior = palette.interior_breakpoints();
        assert_eq!(interior.len(), count - 1);
        let step = 10.0 / count as f64;
        for (i, b) in interior.iter().enumerate() {
            assert!(*b > -3.0 && *b < 7.0);
            assert!((b - (-3.0 + step * (i + 1) as f64)).abs() < 1e-9);
        }
        assert!(interior.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn every_in_range_value_has_one_bin_containing_it() {
    let palette = palette(&PaletteOptions::default().with_range(0.0, 0.3).with_count_colors(3));
    let bins = palette.bins();
    for i in 0..=300 {
        let v = i as f64 / 300.0 * 0.3;
        let idx = bins.locate(v).unwrap();
        let (lo, hi) = bins.bounds(idx).unwrap();
        assert!(lo <= v && v <= hi, "{v} not in bin {idx} [{lo}, {hi}]");
        if idx + 1 < bins.count() { assert!(v < hi) }
    }
    assert_eq!(bins.locate(0.3), Some(2));
}

#[test]
fn out_of_range_values_follow_policy() {
    let options = PaletteOptions::new(["France", "Spain"], [0.5, 1.5]);
    let folded = palette(&options);
    assert_eq!(folded.bin_of("France"), Some(2));
    assert_eq!(folded.bin_of("Spain"), None);

    let strict = Palette::new(&TerritoryTable::eu(), &options.with_out_of_range(OutOfRangePolicy::Error));
    assert_eq!(strict.unwrap_err(), MapError::ValueOutOfRange {
        name: "Spain".into(),
        value: 1.5,
        min: 0.0,
        max: 1.0,
    });
}

#[test]
fn very_wide_range_keeps_increasing_breakpoints() {
    let palette = palette(&PaletteOptions::new(["France"], [0.0]).with_range(-1e308, 1e308).with_count_colors(2));
    assert_eq!(palette.breakpoints(), &[-1e308, 0.0, 1e308]);
    assert_eq!(palette.labels(), &["[-1e308, 0)".to_string(), "[0, 1e308]".to_string()]);
    assert_eq!(palette.bin_of("France"), Some(1));
}

#[test]
fn absent_values_are_unassigned() {
    let mut options = PaletteOptions::new(["France", "Spain"], [0.5, 0.5]);
    options.values[1] = None;
    assert_eq!(palette(&options).bin_of("Spain"), None);
}

#[test]
fn mid_color_is_the_ramp_center() {
    let palette = palette(&PaletteOptions::default()
        .with_count_colors(3)
        .with_colors("#000000", [255.0, 255.0, 255.0])
        .with_mid_color([1.0, 0.0, 0.0]));
    assert_eq!(palette.colors(), &[Color::BLACK, Color::rgb(255, 0, 0), Color::WHITE]);
}

#[test]
fn contract_violations_are_rejected() {
    let table = TerritoryTable::eu();
    let err = |options: PaletteOptions| Palette::new(&table, &options).unwrap_err();

    assert_eq!(err(PaletteOptions::default().with_count_colors(1)), MapError::InvalidColorCount(1));
    assert_eq!(err(PaletteOptions::default().with_count_colors(11)), MapError::InvalidColorCount(11));
    assert_eq!(err(PaletteOptions::default().with_range(1.0, 1.0)), MapError::InvalidRange { min: 1.0, max: 1.0 });
    assert_eq!(
        err(PaletteOptions::new(["France", "Spain", "France"], [0.1, 0.2, 0.3])),
        MapError::DuplicateNames(vec!["France".into()]),
    );

    let mut short = PaletteOptions::new(["France", "Spain"], [0.1, 0.2]);
    short.values.pop();
    assert_eq!(err(short), MapError::LengthMismatch { what: "values", expected: 2, actual: 1 });

    assert_eq!(
        err(PaletteOptions::default().with_not_applicable(["Atlantis"])),
        MapError::UnknownTerritory("Atlantis".into()),
    );
    assert!(matches!(
        err(PaletteOptions::default().with_colors("#12345", "#000000")),
        MapError::InvalidColor(_)
    ));
}

#[test]
fn color_literals_normalize_idempotently() {
    let inputs: Vec<ColorLiteral> = vec![
        [1.0, 1.0, 1.0].into(),
        [255.0, 255.0, 255.0].into(),
        [0.2, 0.4, 0.6, 0.5].into(),
        [12.0, 200.0, 7.0, 128.0].into(),
        "08519c".into(),
        "#08519CFF".into(),
    ];
    for input in inputs {
        let once = normalize(input.clone()).unwrap();
        assert_eq!(normalize(once.to_hex()).unwrap(), once, "{input:?}");
    }
    assert_eq!(normalize([1.0, 1.0, 1.0]).unwrap().to_hex(), "#FFFFFFFF");
    assert_eq!(normalize([255.0, 255.0, 255.0]).unwrap().to_hex(), "#FFFFFFFF");
}
