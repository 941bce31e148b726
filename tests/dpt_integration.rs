//! Integration tests for the knx-dpt public API
//!
//! These tests drive the codecs the way a caller outside the crate does:
//! bytes from the bus go through `parse`, typed values go out through
//! `to_payload`, and configuration text goes through `parse_syntax`.

use knx_dpt::dpt::{
    dpt20, dpt23, DataPointType, DataPointValue, DayOfWeek, Dpt1, Dpt10, Dpt11, Dpt13, Dpt14, Dpt16,
    Dpt19, Dpt21, Dpt22, Dpt232, Dpt3, Dpt5, Dpt7, Dpt9, EnumDpt, EnumEntry, EnumRegistryBuilder, KnxDate,
    KnxTime, Rgb, StepCode,
};
use knx_dpt::KnxError;

/// Decode `bytes` and check that the value re-encodes to the same bytes
fn assert_round_trip<D: DataPointType>(dpt: &D, bytes: &[u8]) {
    let value = dpt.parse(bytes).unwrap();
    assert_eq!(value.to_payload().as_slice(), bytes, "DPT {}", dpt.id());
    assert_eq!(value.dpt_id(), dpt.id());
}

fn date(year: u16, month: u8, day: u8) -> KnxDate {
    KnxDate::new(year, month, day).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_date_century_scenario() {
    assert_eq!(Dpt11::Date.encode_to_bytes(date(1990, 1, 1)).unwrap(), [0x01, 0x01, 0x5A]);
    let value = Dpt11::Date.parse(&[0x1F, 0x0C, 0x59]).unwrap();
    assert_eq!(value.date(), date(2089, 12, 31));
    assert_eq!(value.to_string(), "2089-12-31");

    // First and last day of the boundary years
    for (y, m, d) in [(1990, 1, 1), (1990, 12, 31), (2089, 1, 1), (2089, 12, 31)] {
        let bytes = Dpt11::Date.encode_to_bytes(date(y, m, d)).unwrap();
        assert_eq!(Dpt11::Date.parse(&bytes).unwrap().date(), date(y, m, d));
    }
}

#[test]
fn test_switch_scenario() {
    let on = Dpt1::Switch.of(true);
    assert_eq!(on.to_payload().as_slice(), &[0x01]);
    assert_eq!(on.to_string(), "On");
    assert_eq!(Dpt1::Switch.parse_syntax(&["on"]).unwrap(), on);
}

#[test]
fn test_channel_list_scenario() {
    assert_eq!(Dpt21::ChannelActivation8.parse(&[0x87]).unwrap().to_string(), "1, 2, 3, 8");
    assert_eq!(Dpt21::ChannelActivation8.parse(&[0x00]).unwrap().to_string(), "none");
}

#[test]
fn test_lenient_boolean_decode() {
    // Only 0x01 is true; any other pattern decodes as false
    assert!(!Dpt1::Switch.parse(&[0x02]).unwrap().value());
    assert!(!Dpt1::Switch.parse(&[0xFF]).unwrap().value());
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_round_trips() {
    assert_round_trip(&Dpt1::UpDown, &[0x00]);
    assert_round_trip(&Dpt3::Dimming, &[0x0B]);
    assert_round_trip(&Dpt5::Percentage, &[0xBF]);
    assert_round_trip(&Dpt7::Brightness, &[0xFF, 0xFF]);
    assert_round_trip(&Dpt9::Temperature, &[0x0C, 0x1A]);
    assert_round_trip(&Dpt10::TimeOfDay, &[0x2C, 0x1E, 0x00]);
    assert_round_trip(&Dpt13::Counter, &[0x80, 0x00, 0x00, 0x00]);
    assert_round_trip(&Dpt14::Power, &[0x44, 0x9A, 0x50, 0x00]);
    assert_round_trip(&Dpt16::Ascii, b"KNX\0\0\0\0\0\0\0\0\0\0\0");
    assert_round_trip(&Dpt19::DateTime, &[0x7C, 0x03, 0x0F, 0xAE, 0x1E, 0x00, 0x00, 0x00]);
    assert_round_trip(&Dpt22::ChannelActivation16, &[0x81, 0x01]);
    assert_round_trip(&Dpt232::Rgb, &[0x10, 0x20, 0x30]);
    assert_round_trip(&dpt20::HVAC_MODE, &[0x03]);
    assert_round_trip(&dpt23::UP_DOWN_ACTION, &[0x02]);
}

#[test]
fn test_typed_values_to_bus() {
    assert_eq!(Dpt3::Dimming.encode_to_bytes(true, StepCode::from_u8(3).unwrap()), [0x0B]);
    assert_eq!(Dpt9::Temperature.encode_to_bytes(21.5).unwrap(), [0x0C, 0x33]);

    let time = KnxTime::new(12, 30, 0).unwrap();
    let bytes = Dpt10::TimeOfDay.encode_to_bytes(Some(DayOfWeek::Monday), time).unwrap();
    assert_eq!(bytes, [0x2C, 0x1E, 0x00]);

    assert_eq!(Dpt232::Rgb.encode_to_bytes(Rgb::new(1, 2, 3)), [1, 2, 3]);
}

#[test]
fn test_date_time_from_parts() {
    let value = Dpt19::DateTime
        .of(date(2024, 3, 15), KnxTime::new(14, 30, 0).unwrap())
        .unwrap();
    assert_eq!(value.day_of_week(), Some(DayOfWeek::Friday));
    assert_eq!(Dpt19::DateTime.parse(&value.to_payload()).unwrap(), value);
}

// =============================================================================
// Boundaries and errors
// =============================================================================

#[test]
fn test_range_boundaries() {
    assert!(Dpt5::Percentage.of(100).is_ok());
    assert!(Dpt5::Percentage.of(101).unwrap_err().is_out_of_range());
    assert!(Dpt5::Percentage.of(-1).unwrap_err().is_out_of_range());

    assert!(Dpt9::Temperature.of(-273).is_ok());
    assert!(Dpt9::Temperature.of(-274).unwrap_err().is_out_of_range());

    let err = Dpt7::Pulses.of(65_536).unwrap_err();
    let KnxError::Range(range) = err else {
        panic!("expected range error");
    };
    assert_eq!(range.dpt_id(), "7.001");
    assert_eq!(range.upper(), 65_535.0);
}

#[test]
fn test_error_kinds() {
    assert!(Dpt9::Temperature.parse(&[]).unwrap_err().is_null_argument());
    assert!(Dpt9::Temperature.parse(&[0x00]).unwrap_err().is_incompatible_bytes());
    assert!(Dpt9::Temperature.parse_syntax(&["warm"]).unwrap_err().is_incompatible_syntax());
    assert!(Dpt16::Ascii.of("€").unwrap_err().is_charset_error());
    assert!(dpt20::HVAC_MODE.parse(&[0x09]).unwrap_err().is_enum_not_found());
}

#[test]
fn test_date_time_syntax_errors() {
    let KnxError::Syntax(err) = Dpt19::DateTime.parse_syntax(&["12:00", "x"]).unwrap_err() else {
        panic!("expected syntax error");
    };
    assert!(err.is_missing_date());

    let value = Dpt19::DateTime.parse_syntax(&["Friday", "2024-03-15", "14:30"]).unwrap();
    assert_eq!(value.to_payload().as_slice(), &[0x7C, 0x03, 0x0F, 0xAE, 0x1E, 0x00, 0x00, 0x00]);
}

// =============================================================================
// Enumeration registry
// =============================================================================

#[test]
fn test_registry_uniqueness() {
    let mut builder = EnumRegistryBuilder::<4>::new();
    builder.add_value(EnumEntry::new(1, "Eco", "economy mode")).unwrap();
    builder.add_value(EnumEntry::new(2, "Boost", "boost mode")).unwrap();
    let err = builder.add_value(EnumEntry::new(1, "Other", "other")).unwrap_err();
    assert!(err.is_illegal_argument());

    let dpt = EnumDpt::new("20.900", "Custom mode", builder.registry());
    for (ordinal, name, description) in [(1, "Eco", "economy mode"), (2, "Boost", "boost mode")] {
        assert_eq!(dpt.parse(&[ordinal]).unwrap().name(), name);
        assert_eq!(dpt.parse_syntax(&[name]).unwrap().ordinal(), ordinal);
        let words: Vec<&str> = description.split(' ').collect();
        assert_eq!(dpt.parse_syntax(&words).unwrap().ordinal(), ordinal);
    }
}

// =============================================================================
// Bit flags
// =============================================================================

#[test]
fn test_flag_indexing_matches_raw_bits() {
    for raw in [[0x00, 0x00], [0xFF, 0xFF], [0x5A, 0xC3]] {
        let value = Dpt22::RhccStatus.parse(&raw).unwrap();
        for i in 0..16 {
            let expected = (raw[i / 8] >> (7 - i % 8)) & 1 == 1;
            assert_eq!(value.is_set(i).unwrap(), expected);
        }
        let err = value.is_set(16).unwrap_err();
        assert!(err.is_index_out_of_bounds());
    }
}
