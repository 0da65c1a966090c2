use proptest::prelude::*;
use qthloc::{maidenhead, DegMinSec, GridPrecision, LatLon, Locator};

const FIELD: &str = "ABCDEFGHIJKLMNOPQR";
const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWX";
const DIGITS: &str = "0123456789";

fn pick(alphabet: &'static str) -> impl Strategy<Value = char> {
    (0..alphabet.len()).prop_map(move |i| char::from(alphabet.as_bytes()[i]))
}

fn pair_strategy(level: usize) -> BoxedStrategy<String> {
    let alphabet = match level {
        0 => FIELD,
        _ if level % 2 == 0 => LETTERS,
        _ => DIGITS,
    };
    (pick(alphabet), pick(alphabet))
        .prop_map(|(lon, lat)| format!("{lon}{lat}"))
        .boxed()
}

fn locator_strategy() -> impl Strategy<Value = String> {
    (1..=6_usize).prop_flat_map(|levels| {
        (0..levels)
            .map(pair_strategy)
            .collect::<Vec<_>>()
            .prop_map(|pairs| pairs.concat())
    })
}

/// Longitudes crowded near both ends of the grid
fn edge_longitude() -> impl Strategy<Value = f64> {
    let last = f64::from_bits(180_f64.to_bits() - 1);
    prop_oneof![
        -180.0..180.0f64,
        Just(-180.0),
        Just(last),
        (0_u64..1 << 20).prop_map(move |ulps| f64::from_bits(last.to_bits() - ulps)),
        (179.999_999..180.0f64),
    ]
}

fn edge_latitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        -90.0..=90.0f64,
        Just(-90.0),
        Just(90.0),
        (89.999_999..=90.0f64),
    ]
}

proptest! {
    #[test]
    fn prop_encode_of_decode_is_identity(code in locator_strategy()) {
        let coord = maidenhead::decode(&code).unwrap();
        let back = maidenhead::encode(&coord, code.len()).unwrap();
        prop_assert_eq!(back, code);
    }

    #[test]
    fn prop_lowercase_decodes_the_same(code in locator_strategy()) {
        let upper = maidenhead::decode(&code).unwrap();
        let lower = maidenhead::decode(&code.to_lowercase()).unwrap();
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn prop_encoded_square_contains_point(lat in -90.0..90.0f64, lon in -180.0..180.0f64) {
        let coord = LatLon::create(lat, lon).unwrap();
        let locator = Locator::from_latlon(&coord, GridPrecision::Six).unwrap();
        let center = locator.to_latlon();

        // A six character square is 5' by 2.5'
        prop_assert!((center.longitude() - lon).abs() <= 2.5 / 60.0 + 1e-9);
        prop_assert!((center.latitude() - lat).abs() <= 1.25 / 60.0 + 1e-9);
    }

    #[test]
    fn prop_every_precision_contains_edge_points(lat in edge_latitude(), lon in edge_longitude()) {
        let coord = LatLon::create(lat, lon).unwrap();

        for precision in GridPrecision::ALL {
            let center = Locator::from_latlon(&coord, precision).unwrap().to_latlon();
            let (lon_span, lat_span) = maidenhead::level_span(precision.levels() - 1).unwrap();

            prop_assert!((center.longitude() - lon).abs() <= lon_span / 2.0 + 1e-9);
            prop_assert!((center.latitude() - lat).abs() <= lat_span / 2.0 + 1e-9);
        }
    }

    #[test]
    fn prop_dms_round_trip(value in -360.0..360.0f64) {
        let back = DegMinSec::from_decimal(value).to_decimal_degrees();
        prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
    }

    #[test]
    fn prop_dms_parts_share_sign(value in -360.0..360.0f64) {
        let dms = DegMinSec::from_decimal(value);
        for part in [dms.degrees, dms.minutes, dms.seconds] {
            // Rounding in the minutes step may leave a sub-microsecond residue
            prop_assert!(part.abs() < 1e-6 || part.signum() == value.signum());
        }
    }
}
