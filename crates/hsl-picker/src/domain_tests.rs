//! Domain-critical regression tests for hsl-picker.
//!
//! These tests pin the numeric contracts the picker relies on. Each test
//! documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::color::{hsl_to_color, hue_of, lightness_of, normalize, pack, saturation_of};
    use crate::{color_at_hue, parse, Channel, Color, ColorPicker, CssResolver, Pointer, RawColor};

    // ========================================================================
    // GAP 1: Normalization is a fixed point
    // ========================================================================

    /// If this breaks, it means: normalizing a canonical color moves it,
    /// so refreshes can drift the color one LSB at a time.
    #[test]
    fn test_normalize_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..2_000 {
            let mut channel = || match rng.gen_range(0..20) {
                0 => f64::NAN,
                1 => f64::INFINITY,
                _ => rng.gen_range(-64.0..320.0),
            };
            let raw = RawColor::new(channel(), channel(), channel());
            let once = normalize(raw).unwrap();
            let twice = normalize(RawColor::from(once)).unwrap();
            assert_eq!(once, twice, "normalize moved {raw:?}");
            for value in [once.r(), once.g(), once.b()] {
                assert!(
                    value.fract() == 0.0 && (0.0..=255.0).contains(&value),
                    "REGRESSION: channel {value} of {raw:?} is not a whole byte"
                );
            }
        }
    }

    // ========================================================================
    // GAP 2: Hex text round-trips through the resolver
    // ========================================================================

    /// If this breaks, it means: the hex field shows a value that, typed
    /// back in, selects a different color.
    #[test]
    fn test_pack_parse_round_trip() {
        let resolver = CssResolver::new();
        for hue in (0..360).step_by(15) {
            for saturation in [0.0, 25.0, 50.0, 80.0, 100.0] {
                for lightness in [0.0, 12.5, 25.0, 50.0, 75.0, 100.0] {
                    let color = hsl_to_color(f64::from(hue), saturation, lightness);
                    let text = pack(RawColor::from(color)).unwrap();
                    assert_eq!(
                        parse(&text, &resolver).unwrap(),
                        color,
                        "hsl({hue}, {saturation}, {lightness}) packed as {text}"
                    );
                }
            }
        }
    }

    // ========================================================================
    // GAP 3: Hue extraction agrees with HSL construction
    // ========================================================================

    /// If this breaks, it means: the hue tie-break or rounding changed, and
    /// primaries and secondaries no longer land on their exact angles.
    #[test]
    fn test_hue_of_primaries_and_secondaries() {
        for hue in [0u16, 60, 120, 180, 240, 300] {
            let color = hsl_to_color(f64::from(hue), 100.0, 50.0);
            assert_eq!(hue_of(RawColor::from(color)).unwrap(), hue);
        }
    }

    /// If this breaks, it means: `setRGB` after `setHue` jumps the hue
    /// cursor even though the color did not change. At full saturation one
    /// channel step is under a quarter degree, so every whole hue survives.
    #[test]
    fn test_every_whole_hue_survives_quantization() {
        for hue in 0u16..360 {
            let color = hsl_to_color(f64::from(hue), 100.0, 50.0);
            assert_eq!(color.hue(), hue, "hue {hue} came back as {}", color.hue());
        }
    }

    // ========================================================================
    // GAP 4: Achromatic colors and fixed points
    // ========================================================================

    #[test]
    fn test_achromatic_colors_have_no_hue_or_saturation() {
        for level in [0.0, 128.0, 192.0, 255.0] {
            let gray = RawColor::new(level, level, level);
            assert_eq!(saturation_of(gray).unwrap(), 0.0);
            assert_eq!(hue_of(gray).unwrap(), 0);
        }
    }

    #[test]
    fn test_hsl_fixed_points() {
        assert_eq!(hsl_to_color(0.0, 0.0, 0.0), Color::BLACK);
        assert_eq!(hsl_to_color(0.0, 0.0, 100.0), Color::WHITE);
        assert_eq!(hsl_to_color(0.0, 100.0, 50.0), Color::RED);
        assert_eq!(hsl_to_color(120.0, 100.0, 50.0), Color::GREEN);
        assert_eq!(hsl_to_color(240.0, 100.0, 50.0), Color::BLUE);

        assert_eq!(lightness_of(RawColor::new(0.0, 0.0, 0.0)).unwrap(), 0.0);
        assert_eq!(lightness_of(RawColor::new(255.0, 255.0, 255.0)).unwrap(), 100.0);
        assert_eq!(lightness_of(RawColor::new(255.0, 0.0, 0.0)).unwrap(), 50.0);
    }

    #[test]
    fn test_color_at_hue_landmarks() {
        assert_eq!(color_at_hue(0.0), Color::RED);
        assert_eq!(color_at_hue(360.0 % 360.0), Color::RED);
        assert_eq!(color_at_hue(180.0), Color::CYAN);
    }

    // ========================================================================
    // GAP 5: Picker state stays a single consistent record
    // ========================================================================

    /// If this breaks, it means: some mutation path updates the color or
    /// hue without rebasing the shade gradient, or stores an uncanonical
    /// color. Random input sequences exercise every path.
    ///
    /// `set_rgb` takes its color as the base. Every other hue change rebases
    /// from the ramp, and saturation or lightness changes keep the base.
    #[test]
    fn test_random_mutations_keep_state_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut picker = ColorPicker::new();
        picker.set_rgb(255.0, 0.0, 0.0);
        let mut expected_base = Color::RED;

        for step in 0..1_000 {
            match rng.gen_range(0..7) {
                0 => {
                    picker.set_rgb(
                        rng.gen_range(-10.0..270.0),
                        rng.gen_range(-10.0..270.0),
                        rng.gen_range(-10.0..270.0),
                    );
                    expected_base = picker.color();
                }
                1 => {
                    let channel = [Channel::Red, Channel::Green, Channel::Blue][rng.gen_range(0..3)];
                    if picker.set_channel(channel, rng.gen_range(0.0..256.0)) {
                        expected_base = color_at_hue(f64::from(picker.snapshot().hue));
                    }
                }
                2 => {
                    if picker.set_hue(rng.gen_range(-20.0..400.0)) {
                        expected_base = color_at_hue(f64::from(picker.snapshot().hue));
                    }
                }
                3 => {
                    picker.set_saturation(rng.gen_range(-5.0..105.0));
                }
                4 => {
                    picker.set_lightness(rng.gen_range(-5.0..105.0));
                }
                5 => {
                    picker.set_from_pointer(Pointer::Shade {
                        u: rng.gen_range(-0.1..1.1),
                        v: rng.gen_range(-0.1..1.1),
                    });
                }
                _ => {
                    let hue_pointer = Pointer::Hue {
                        v: rng.gen_range(0.0..=1.0),
                    };
                    if picker.set_from_pointer(hue_pointer) {
                        expected_base = color_at_hue(f64::from(picker.snapshot().hue));
                    }
                }
            }

            let snap = picker.snapshot();
            assert!(snap.hue < 360, "step {step}: hue {}", snap.hue);
            assert!((0.0..=100.0).contains(&snap.saturation), "step {step}");
            assert!((0.0..=100.0).contains(&snap.lightness), "step {step}");
            assert_eq!(
                snap.base, expected_base,
                "REGRESSION: step {step} left base out of sync with the last hue change"
            );
            assert_eq!(
                Color::normalize(RawColor::from(snap.color)),
                snap.color,
                "step {step}: stored color is not canonical"
            );
        }
    }
}
