//! End-to-end import of Tailwind v4 and shadcn stylesheets.

use horizon_lattice_tokens::prelude::*;
use horizon_lattice_tokens::shadow::DEFAULT_SHADOW_COLOR;

const TAILWIND_THEME: &str = r#"
@import "tailwindcss";

/* Brand palette */
@theme {
  --font-sans: "Inter Variable", ui-sans-serif, system-ui, sans-serif;
  --font-mono: ui-monospace, SFMono-Regular, Menlo, monospace;
  --font-sans--font-feature-settings: "cv11";

  --color-red-500: oklch(63.7% 0.237 25.331);
  --color-blue-500: #3b82f6;
  --color-slate-950: hsl(229 84% 5%);
  --color-white: #fff;
  --color-overlay: rgba(0, 0, 0, 50%);
  --color-current: currentColor;

  --spacing: 0.25rem;

  --breakpoint-sm: 40rem;
  --breakpoint-md: 48rem;
  --container-3xs: 16rem;

  --text-xs: 0.75rem;
  --text-xs--line-height: calc(1 / 0.75);
  --text-sm: 0.875rem;
  --text-sm--line-height: calc(1.25 / 0.875);
  --text-sm--letter-spacing: 0.01em;
  --text-sm--font-weight: 500;

  --font-weight-normal: 400;
  --font-weight-bold: 700;
  --tracking-tight: -0.025em;
  --leading-relaxed: 1.625;

  --radius-xs: 0.125rem;
  --radius-1.5: 0.375rem;

  --shadow-xs: 0 1px 2px 0 rgb(0 0 0 / 0.05);
  --shadow-sm:
    0 1px 3px 0 rgb(0 0 0 / 0.1),
    0 1px 2px -1px rgb(0 0 0 / 0.1);
  --shadow-inner: inset 0 2px 4px 0 rgb(0 0 0 / 0.05);
  --inset-shadow-xs: inset 0 1px 1px rgb(0 0 0 / 0.05);
  --drop-shadow-md: 0 3px 3px;
  --text-shadow-lg: 0px 1px 2px rgb(0 0 0 / 0.1), 0px 3px 2px rgb(0 0 0 / 0.1);

  --blur-md: 12px;
  --backdrop-blur: 8px;
  --opacity-50: 50%;
  --border-width-2: 2px;
  --max-w-prose: 65rem;
  --skew-6: 6deg;

  --ease-out: cubic-bezier(0, 0, 0.2, 1);
  --animate-spin: spin 1s linear infinite;
}

@layer base {
  body { font-family: var(--font-sans); }
}
"#;

const SHADCN: &str = r#"
:root {
  --radius: 0.625rem;
  --background: oklch(1 0 0);
  --foreground: oklch(0.145 0 0);
  --primary: oklch(0.205 0 0);
  --primary-foreground: oklch(0.985 0 0);
  --border: oklch(0.922 0 0);
  --chart-1: oklch(0.646 0.222 41.116);
}

.dark {
  --background: oklch(0.145 0 0);
  --foreground: oklch(0.985 0 0);
  --primary: oklch(0.922 0 0);
  --primary-foreground: oklch(0.205 0 0);
  --border: oklch(1 0 0 / 10%);
}

@theme inline {
  --color-background: var(--background);
  --radius-lg: var(--radius);
}
"#;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_tailwind_theme_families() {
    init_logging();
    let tokens = TokenImporter::new().import_css(TAILWIND_THEME);
    let set = &tokens.primitives;

    assert!(tokens.light.is_empty());
    assert!(tokens.dark.is_empty());

    // currentColor is not a color value
    assert_eq!(set.colors.len(), 5);
    assert_eq!(set.color(&["white"]).unwrap().color, Color::WHITE);
    assert_eq!(set.color(&["overlay"]).unwrap().color, Color::new(0.0, 0.0, 0.0, 0.5));
    assert!(set.color(&["current"]).is_none());

    let red = set.color(&["red", "500"]).unwrap().color;
    assert!(red.r > 0.9 && red.g < 0.3 && red.b < 0.3);

    let fonts: Vec<_> = set.fonts.iter().map(|f| (f.name.as_str(), f.family.as_str())).collect();
    assert_eq!(fonts, vec![("sans", "Inter Variable"), ("mono", "ui-monospace")]);

    assert_eq!(set.breakpoints.len(), 2);
    assert_eq!(set.float(FloatFamily::Breakpoints, &["md"]).unwrap().value, 768.0);
    assert_eq!(set.containers[0].value, 256.0);
    assert_eq!(set.font_weights.len(), 2);
    assert!((set.tracking[0].value + 0.4).abs() < 1e-5);
    assert_eq!(set.leading[0].value, 1.625);
    assert_eq!(set.radius.len(), 2);
    assert_eq!(set.float(FloatFamily::Radius, &["1.5"]).unwrap().value, 6.0);
    assert_eq!(set.blur[0].value, 12.0);
    assert_eq!(set.backdrop_blur[0].path, vec!["default"]);
    assert_eq!(set.opacity[0].value, 0.5);
    assert_eq!(set.border_width[0].value, 2.0);
    assert_eq!(set.max_width[0].value, 1040.0);
    assert_eq!(set.skew[0].value, 6.0);
}

#[test]
fn test_tailwind_spacing_scale() {
    let set = TokenImporter::new().import_css(TAILWIND_THEME).primitives;

    assert_eq!(set.spacing.len(), 33);
    assert_eq!(set.float(FloatFamily::Spacing, &["0_5"]).unwrap().value, 2.0);
    assert_eq!(set.float(FloatFamily::Spacing, &["4"]).unwrap().value, 16.0);
    assert_eq!(set.float(FloatFamily::Spacing, &["96"]).unwrap().value, 384.0);
}

#[test]
fn test_tailwind_typography() {
    let set = TokenImporter::new().import_css(TAILWIND_THEME).primitives;

    assert_eq!(set.typography.len(), 2);

    let xs = &set.typography[0];
    assert_eq!(xs.name, "xs");
    assert_eq!(xs.font_size, 12.0);
    assert!((xs.line_height.unwrap() - 4.0 / 3.0).abs() < 1e-4);
    assert_eq!(xs.font_weight, None);

    let sm = &set.typography[1];
    assert_eq!(sm.font_size, 14.0);
    assert!((sm.line_height.unwrap() - 1.4286).abs() < 1e-3);
    assert_eq!(sm.font_weight, Some(500.0));
}

#[test]
fn test_tailwind_shadows() {
    let set = TokenImporter::new().import_css(TAILWIND_THEME).primitives;
    let shadow = |name: &str| set.shadows.iter().find(|s| s.name == name);

    // shadow-inner is reserved and never imported
    assert_eq!(set.shadows.len(), 5);
    assert!(set.shadows.iter().all(|s| !s.name.ends_with("inner")));

    let sm = shadow("drop-shadow/sm").unwrap();
    assert_eq!(sm.layers.len(), 2);
    assert_eq!(sm.layers[1].spread, -1.0);
    assert!((sm.layers[0].color.a - 0.1).abs() < 1e-6);

    let inset = shadow("inset-shadow/xs").unwrap();
    assert_eq!(inset.layers[0].kind, ShadowKind::InnerShadow);

    let drop = shadow("drop-shadow/md").unwrap();
    assert_eq!(drop.layers[0].color, DEFAULT_SHADOW_COLOR);

    let text = shadow("text-shadow/lg").unwrap();
    assert_eq!(text.layers.len(), 2);
}

#[test]
fn test_shadcn_modes() {
    init_logging();
    let tokens = TokenImporter::new().import_css(SHADCN);

    // var() references in @theme inline are not resolved
    assert!(tokens.primitives.colors.is_empty());
    assert!(tokens.primitives.radius.is_empty());

    assert_eq!(tokens.light.colors.len(), 6);
    assert_eq!(tokens.dark.colors.len(), 5);
    assert_eq!(tokens.light.float(FloatFamily::Radius, &["default"]).unwrap().value, 10.0);

    let light_bg = tokens.light.color(&["background"]).unwrap().color;
    let dark_bg = tokens.dark.color(&["background"]).unwrap().color;
    assert_eq!(light_bg, Color::WHITE);
    assert!(dark_bg.r < 0.1 && dark_bg.is_opaque());

    let border = tokens.dark.color(&["border"]).unwrap().color;
    assert!((border.a - 0.1).abs() < 1e-6);

    assert!(tokens.light.color(&["primary", "foreground"]).is_some());
}

#[test]
fn test_token_set_serializes() {
    let set = TokenImporter::new().import_css(TAILWIND_THEME).primitives;

    let json = serde_json::to_value(&set).unwrap();
    assert!(json["colors"].is_array());
    assert!(json["backdropBlur"].is_array());
    assert_eq!(json["shadows"][0]["layers"][0]["kind"], "DROP_SHADOW");

    let back: TokenSet = serde_json::from_value(json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn test_json_theme_export() {
    let options = ImportOptions::from_toml_str(
        r#"
        json_prefix = "colors"
        json_float_prefixes = ["radius"]
        "#,
    )
    .unwrap();
    let importer = TokenImporter::with_options(options).unwrap();

    let tokens = importer
        .import_json_str(
            r##"{
                "colors/background": { "Light": "#ffffff", "Dark": "oklch(0.145 0 0)" },
                "colors/accent/500": { "Light": "hsl(217 91% 60%)" },
                "radius/md": { "Light": "0.375rem" },
                "font-sans": "Inter",
                "heading/1": { "size": "2rem", "weight": 700 }
            }"##,
        )
        .unwrap();

    assert_eq!(tokens.colors.light.len(), 2);
    assert_eq!(tokens.colors.dark.len(), 1);
    assert_eq!(tokens.colors.light[1].path, vec!["accent", "500"]);

    let radius = &tokens.floats["radius"][0];
    assert_eq!(radius.name, "md");
    assert_eq!((radius.light, radius.dark), (6.0, 6.0));
}
