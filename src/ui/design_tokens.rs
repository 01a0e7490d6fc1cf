// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by the album views.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use album_lens::ui::design_tokens::{palette, spacing};

let gap = spacing::MD; // 16px
let muted = palette::GRAY_500;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_600: Color = Color::from_rgb(0.467, 0.467, 0.467); // #777
    pub const GRAY_500: Color = Color::from_rgb(0.545, 0.545, 0.545); // #8b8b8b
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.98, 0.984);

    // Dark input surfaces
    pub const DARK_INPUT_BG: Color = Color::from_rgb(0.2, 0.2, 0.22);
    pub const DARK_INPUT_BORDER: Color = Color::from_rgb(0.3, 0.3, 0.33);
    pub const DARK_INPUT_TEXT: Color = Color::from_rgb(0.8, 0.8, 0.82);

    // Brand colors (blue scale)
    pub const PRIMARY_300: Color = Color::from_rgb(0.576, 0.773, 0.992); // focus ring
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;

    /// Height shared by dropdowns and the direction toggle so they line up.
    pub const CONTROL_HEIGHT: f32 = 30.0;

    pub const SORT_DROPDOWN_WIDTH: f32 = 180.0;
    pub const RATING_DROPDOWN_WIDTH: f32 = 150.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - Album name
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Legends above controls
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border and Radius Scales
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    assert!(sizing::CONTROL_HEIGHT > sizing::ICON_SM);
};
