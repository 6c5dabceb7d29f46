//! Integration tests for the dye crates.
//!
//! This crate contains end-to-end tests that exercise parsing, conversion,
//! serialization and derivation together through the public APIs.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use dye::prelude::*;
    use dye_core::Error;

    fn assert_close(a: &Color, b: &Color, epsilon: f64) {
        assert_eq!(a.space(), b.space(), "{a:?} vs {b:?}");
        for (x, y) in a.data().iter().zip(b.data()) {
            assert_abs_diff_eq!(*x, *y, epsilon = epsilon);
        }
    }

    /// Every 17th level per channel, plus the extremes.
    fn rgb_grid() -> impl Iterator<Item = Color> {
        let levels = (0..=255).step_by(17).map(f64::from);
        levels.clone().flat_map(move |r| {
            let levels = levels.clone();
            levels.clone().flat_map(move |g| {
                levels.clone().map(move |b| Color::rgb(r, g, b))
            })
        })
    }

    #[test]
    fn test_css_string_of_parsed_expressions() {
        let cases = [
            ("black", "#000"),
            ("white", "#fff"),
            ("rgb(0%, 50%, 100%)", "#0080ff"),
            ("rgba(0%, 50%, 100%, .5)", "rgba(0,128,255,0.5)"),
            ("hsl(180, .5, .5)", "#40bfbf"),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_color(input).unwrap().to_string(), expected, "input {input}");
        }
    }

    #[test]
    fn test_rgb_hsl_round_trip() {
        for c in rgb_grid() {
            let back = c.to_hsl().to_rgb();
            assert_close(&back, &c, 1e-3);
        }
    }

    #[test]
    fn test_hsl_rgb_round_trip() {
        for h in (0..360).step_by(15).map(f64::from) {
            for s in [0.1, 0.5, 1.0] {
                for l in [0.1, 0.25, 0.5, 0.75, 0.9] {
                    let c = Color::hsl(h, s, l);
                    assert_close(&c.to_rgb().to_hsl(), &c, 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_alpha_survives_every_conversion_exactly() {
        let sources = [Color::rgba(10.0, 20.0, 30.0, 0.37), Color::hsla(200.0, 0.4, 0.6, 0.37)];
        for c in sources {
            for space in ColorSpace::REGISTERED {
                let converted = convert(&c, space).unwrap();
                if converted.is_alpha() {
                    assert_eq!(converted.opacity(), 0.37);
                    let back = convert(&converted, c.space()).unwrap();
                    assert_eq!(back.opacity(), 0.37);
                }
            }
        }
    }

    #[test]
    fn test_hex_round_trip() {
        for c in rgb_grid() {
            assert_eq!(parse_hex(&to_hex(&c)).unwrap(), c);
        }
        // Full sweep of each channel.
        for v in (0..=255).map(f64::from) {
            for c in [Color::rgb(v, 0.0, 0.0), Color::rgb(0.0, v, 0.0), Color::rgb(0.0, 0.0, v)] {
                assert_eq!(parse_hex(&to_hex(&c)).unwrap(), c);
            }
        }
    }

    #[test]
    fn test_hex_shorthand_collapse() {
        assert_eq!(to_hex(&Color::rgb(0.0, 0.0, 0.0)), "#000");
        assert_eq!(to_hex(&Color::rgb(255.0, 255.0, 255.0)), "#fff");
        assert_eq!(to_hex(&Color::rgb(18.0, 52.0, 86.0)), "#123456");
        assert_eq!(to_hex(&Color::rgb(17.0, 34.0, 51.0)), "#123");
        assert_eq!(to_hex(&Color::rgb(17.0, 34.0, 52.0)), "#112234");
    }

    #[test]
    fn test_known_conversions() {
        let pairs = [
            ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            ([255.0, 0.0, 0.0], [0.0, 1.0, 0.5]),
            ([0.0, 255.0, 0.0], [120.0, 1.0, 0.5]),
            ([0.0, 0.0, 255.0], [240.0, 1.0, 0.5]),
        ];
        for ([r, g, b], [h, s, l]) in pairs {
            assert_close(&Color::rgb(r, g, b).to_hsl(), &Color::hsl(h, s, l), 1e-9);
            assert_close(&Color::hsl(h, s, l).to_rgb(), &Color::rgb(r, g, b), 1e-9);
        }
    }

    #[test]
    fn test_functional_parse_vectors() {
        assert_eq!(parse_function("rgb(0,0,0)").unwrap(), Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(parse_function("rgb(25%,127,75%)").unwrap(), Color::rgb(64.0, 127.0, 191.0));
        assert_eq!(
            parse_function("hsla(50%,0.1,25%,.4)").unwrap(),
            Color::hsla(180.0, 0.1, 0.25, 0.4)
        );
    }

    #[test]
    fn test_mix_average_with_self() {
        for c in rgb_grid() {
            assert_eq!(c.mix_with(&c, MixMode::Average), c);
        }
        let translucent = Color::hsla(30.0, 0.5, 0.5, 0.25);
        let mixed = translucent.mix_with(&translucent, MixMode::Average);
        assert_close(&mixed, &translucent.to_rgba(), 1e-9);
        assert_eq!(mixed.opacity(), 0.25);
    }

    #[test]
    fn test_to_string_dispatch() {
        assert!(Color::rgb(1.0, 2.0, 3.0).to_string().starts_with('#'));
        assert!(Color::hsl(1.0, 0.2, 0.3).to_string().starts_with('#'));
        assert!(Color::rgba(1.0, 2.0, 3.0, 1.0).to_string().starts_with('#'));
        assert!(Color::hsla(1.0, 0.2, 0.3, 1.0).to_string().starts_with('#'));
        assert!(Color::rgba(1.0, 2.0, 3.0, 0.99).to_string().starts_with("rgba("));
        assert!(Color::hsla(1.0, 0.2, 0.3, 0.0).to_string().starts_with("rgba("));
    }

    #[test]
    fn test_light_shade_scheme() {
        let c = parse_color("hsl(200, 40%, 30%)").unwrap();
        let scheme = c.scheme(SchemeKind::Light, SchemeOptions::default());
        assert_eq!(scheme.keys().collect::<Vec<_>>(), ["normal", "light", "lighter", "lightest"]);
        assert_eq!(scheme.get("normal"), Some(&c));

        let lightness: Vec<f64> = scheme.colors().map(Color::lightness).collect();
        assert!(lightness.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_light_shade_normal_of_rgb_input_is_hsl() {
        let c = parse_color("rgb(100, 149, 237)").unwrap();
        let scheme = c.scheme(SchemeKind::Light, SchemeOptions::default());
        let normal = scheme.get("normal").unwrap();
        assert_eq!(normal, &c.to_hsl());
        assert_close(&normal.to_rgb(), &c, 1e-9);
    }

    #[test]
    fn test_shade_scheme_directions() {
        let c = Color::hsl(10.0, 0.5, 0.5);
        let scheme = c.scheme(SchemeKind::Shade, SchemeOptions::default());
        assert_eq!(scheme.len(), 7);
        assert_abs_diff_eq!(scheme.get("lightest").unwrap().lightness(), 0.8, epsilon = 1e-9);
        assert_abs_diff_eq!(scheme.get("darkest").unwrap().lightness(), 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_error_scenarios() {
        assert!(matches!(parse_hex("#12"), Err(Error::InvalidHexExpression { .. })));
        assert!(matches!(parse_function("hsl(1,2)"), Err(Error::ArgumentCountMismatch { .. })));
        let c = Color::rgb(1.0, 2.0, 3.0);
        for space in [ColorSpace::Hsv, ColorSpace::Cmyk, ColorSpace::Xyz, ColorSpace::Lab] {
            assert_eq!(convert(&c, space).unwrap_err(), Error::unknown_space(space.name()));
        }
        assert!(matches!(
            parse_color("#12"),
            Err(DyeError::Core(Error::InvalidHexExpression { .. }))
        ));
    }

    #[test]
    fn test_mutators_do_not_clamp() {
        let c = Color::hsla(0.0, 0.95, 0.95, 0.95);
        assert_abs_diff_eq!(c.lighten(0.1).lightness(), 1.05, epsilon = 1e-9);
        assert_abs_diff_eq!(c.tint(0.1).saturation(), 1.05, epsilon = 1e-9);
        assert_abs_diff_eq!(c.fade_in(0.1).opacity(), 1.05, epsilon = 1e-9);
        assert_abs_diff_eq!(c.darken(1.0).lightness(), -0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_named_colors_agree_with_hex() {
        let named = dye_names::lookup("cornflowerBlue").unwrap();
        assert_eq!(named, parse_color("#6495ed").unwrap());
        assert_eq!(named, dye!("rgb(" "100, 149, 237" ")").unwrap());
        assert!(dye_names::len() >= 865);
    }

    #[test]
    fn test_serde_json_round_trip() {
        let c = parse_color("hsla(120, 50%, 25%, .5)").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"space":"hsla","data":[120.0,0.5,0.25,0.5]}"#);
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), c);

        let bad = r#"{"space":"rgb","data":[1.0,2.0]}"#;
        assert!(serde_json::from_str::<Color>(bad).is_err());
    }
}
