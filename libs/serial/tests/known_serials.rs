//! Decoding and generation against real serial numbers.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;
use smbios_catalog::{Catalog, ModelIndex};
use smbios_serial::{derivatives, Codec, Finding, GenerationRequest, SerialError, SerialFormat};

#[rstest]
#[case("W88401231AX", "MacBook5,1", 2008, 40, 139, 1)]
#[case("C02CG123DC79", "MacBookPro6,1", 2010, 13, 139, 1)]
#[case("C02L13ECF8J2", "iMac14,1", 2013, 27, 692, 3)]
#[case("C02LC1T5FLHH", "iMac14,2", 2013, 36, 991, 1)]
#[case("C02LJ41LFH00", "MacBookPro11,1", 2013, 41, 326, 4)]
#[case("C02LJ6QSFD56", "MacBookPro11,2", 2013, 41, 1250, 4)]
#[case("F5KLV0H8F693", "MacPro6,1", 2013, 50, 586, 0)]
fn test_decode_known_serial(
    #[case] input: &str,
    #[case] product: &str,
    #[case] year: i32,
    #[case] week: u32,
    #[case] line: u32,
    #[case] raw_copy: u32,
) {
    let decoded = Codec::builtin().decode(input).unwrap();
    assert!(decoded.is_valid(), "{input}: {:?}", decoded.findings);

    let serial = &decoded.serial;
    assert_eq!(serial.details.product, Some(product));
    assert_eq!(serial.decoded_year, Some(year));
    assert_eq!(serial.decoded_week, Some(week));
    assert_eq!(serial.decoded_line, Some(line));
    assert_eq!(serial.decoded_copy, Some(raw_copy));
    assert_eq!(serial.to_string(), input);
}

#[rstest]
#[case("W88401231AX", SerialFormat::Legacy, "W8", '8')]
#[case("C02L13ECF8J2", SerialFormat::Modern, "C02", 'L')]
fn test_decode_layout(
    #[case] input: &str,
    #[case] format: SerialFormat,
    #[case] country: &str,
    #[case] year: char,
) {
    let serial = Codec::builtin().decode(input).unwrap().into_serial();
    assert_eq!(serial.format, format);
    assert_eq!(serial.is_legacy(), format == SerialFormat::Legacy);
    assert_eq!(serial.country, country);
    assert_eq!(serial.year, year);
    assert!(serial.country_index.is_some());
    assert!(serial.model_index.is_some());
}

#[rstest]
#[case("C02443500KZG2QDA7", SerialError::LooksLikeMlb)]
#[case("C02L13ECF8", SerialError::InvalidLength { len: 10 })]
#[case("C02L13ECF8J23", SerialError::InvalidLength { len: 13 })]
#[case("", SerialError::InvalidLength { len: 0 })]
fn test_decode_rejects_length(#[case] input: &str, #[case] expected: SerialError) {
    let err = Codec::builtin().decode(input).unwrap_err();
    assert!(err.is_length_error());
    assert_eq!(err, expected);
}

#[test]
fn test_every_catalog_serial_is_valid() {
    let codec = Codec::builtin();
    for (i, model) in codec.catalog().models().iter().enumerate() {
        let decoded = codec.decode(model.serial).unwrap();
        assert!(
            decoded.is_valid(),
            "{} ({}): {:?}",
            model.product,
            model.serial,
            decoded.findings
        );
        assert_eq!(decoded.serial.model_index.map(usize::from), Some(i));
    }
}

#[test]
fn test_unknown_model_and_location_stay_valid() {
    // Known layout and date, made-up country and model code.
    let decoded = Codec::builtin().decode("ZZ8401231ZZ").unwrap();
    assert!(decoded.is_valid(), "{:?}", decoded.findings);
    assert_eq!(decoded.serial.model_index, None);
    assert_eq!(decoded.serial.country_index, None);
    assert!(decoded
        .findings
        .contains(&Finding::UnknownModel { code: "1ZZ".into() }));
    assert!(decoded
        .findings
        .contains(&Finding::UnknownLocation { code: "ZZ".into() }));
}

#[test]
fn test_out_of_range_week_drops_week_but_keeps_validity() {
    // Week 00 of a legacy serial is outside [1, 53]. The decoded week is
    // dropped, yet nothing else about the serial is wrong.
    let decoded = Codec::builtin().decode("W88001231AX").unwrap();
    assert_eq!(decoded.serial.decoded_week, None);
    assert_eq!(decoded.serial.details.week_start, None);
    assert!(decoded
        .findings
        .contains(&Finding::WeekOutOfRange { week: 0 }));
    assert!(decoded.is_valid());
}

#[test]
fn test_year_outside_production_is_invalid() {
    // MacBook5,1 was built in 2008 and 2009 only.
    let decoded = Codec::builtin().decode("W81401231AX").unwrap();
    assert_eq!(decoded.serial.decoded_year, Some(2011));
    assert!(!decoded.is_valid());
    assert!(matches!(
        decoded.errors().next(),
        Some(Finding::YearNotProduced { year: 2011, .. })
    ));
}

#[rstest]
#[case("W8840123IAX")]
#[case("w88401231AX")]
#[case("W88A01231AX")]
#[case("C02U13ECF8J2")]
#[case("C02LS3ECF8J2")]
fn test_malformed_fields_are_invalid(#[case] input: &str) {
    let decoded = Codec::builtin().decode(input).unwrap();
    assert!(!decoded.is_valid(), "{input}");
}

#[test]
fn test_generate_every_model() {
    let codec = Codec::builtin();
    let mut rng = StdRng::seed_from_u64(2024);

    for (i, model) in codec.catalog().models().iter().enumerate() {
        let request = GenerationRequest::for_model(i.into());
        for _ in 0..20 {
            let decoded = codec.generate(&request, &mut rng).unwrap();
            assert!(decoded.is_valid(), "{}: {:?}", model.product, decoded.findings);

            let serial = &decoded.serial;
            assert_eq!(serial.model, model.canonical_code());
            assert_eq!(serial.model_index.map(usize::from), Some(i));
            assert!(model.produced_in(serial.decoded_year.unwrap()));
            assert!(serial.decoded_week.unwrap() <= 52);
            if let Some(year) = model.preferred_year {
                assert_eq!(serial.decoded_year, Some(i32::from(year)));
            }
        }
    }
}

#[test]
fn test_generate_every_week_of_every_production_year() {
    let codec = Codec::builtin();
    let mut rng = StdRng::seed_from_u64(5);

    for (i, model) in codec.catalog().models().iter().enumerate() {
        for &year in model.years {
            for week in 1..=53 {
                let request = GenerationRequest::builder()
                    .model_index(i.into())
                    .year(i32::from(year))
                    .week(week)
                    .build()
                    .unwrap();
                let decoded = codec.generate(&request, &mut rng).unwrap();
                assert_eq!(decoded.serial.decoded_year, Some(i32::from(year)));
                assert_eq!(decoded.serial.decoded_week, Some(week));
            }
        }
    }
}

#[test]
fn test_generate_with_country_and_copy() {
    let codec = Codec::builtin();
    let index = codec.catalog().find_product("iMac14,1").unwrap();
    let request = GenerationRequest::builder()
        .model_index(index)
        .country("C07")
        .year(2013)
        .week(27)
        .line(1250)
        .copy(4)
        .build()
        .unwrap();

    let decoded = codec
        .generate(&request, &mut StdRng::seed_from_u64(0))
        .unwrap();
    let serial = decoded.serial;
    assert_eq!(serial.country, "C07");
    assert_eq!(serial.decoded_line, Some(1250));
    assert_eq!(serial.copy(), Some(4));
    assert_eq!(serial.to_string(), "C07L15SSF8J2");
}

#[test]
fn test_generate_rejects_country_of_other_layout() {
    let codec = Codec::builtin();
    let index = codec.catalog().find_product("iMac14,1").unwrap();
    let request = GenerationRequest::builder()
        .model_index(index)
        .country("CK")
        .build()
        .unwrap();
    assert!(matches!(
        codec.generate(&request, &mut StdRng::seed_from_u64(0)),
        Err(SerialError::FormatMismatch { .. })
    ));
}

#[test]
fn test_modern_year_2030_out_of_range() {
    let request = GenerationRequest::builder()
        .model_code("HZZZ")
        .year(2030)
        .build()
        .unwrap();
    assert!(matches!(
        Codec::builtin().generate(&request, &mut StdRng::seed_from_u64(0)),
        Err(SerialError::YearOutOfRange { year: 2030, .. })
    ));
}

#[test]
fn test_derivatives_through_codec() {
    let codec = Codec::builtin();
    let serial = codec.decode("W88401231AX").unwrap().into_serial();
    let copies: Vec<_> = codec.derivatives(&serial).map(|d| d.copy).collect();
    assert_eq!(copies, vec![1, 2, 3]);
    assert_eq!(derivatives(&serial).count(), 3);
}

#[test]
fn test_custom_catalog() {
    use smbios_catalog::ModelInfo;

    static MODELS: &[ModelInfo] = &[ModelInfo {
        product: "Test1,1",
        model_codes: &["TST"],
        board_codes: &["TSB"],
        years: &[2005],
        preferred_year: None,
        serial: "XX510123TST",
    }];

    let catalog = Catalog::new(MODELS, &[], &[], &[]);
    let codec = Codec::new(&catalog);
    let decoded = codec
        .generate(
            &GenerationRequest::for_model(ModelIndex::new(0)),
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();
    assert_eq!(decoded.serial.model, "TST");
    assert_eq!(decoded.serial.decoded_year, Some(2005));
    assert_eq!(decoded.serial.country, "XX");
    assert!(decoded.is_valid());
}
