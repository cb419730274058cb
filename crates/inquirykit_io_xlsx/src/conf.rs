//! XLSX constants, colour palette and default format preset factories.

use std::collections::BTreeMap;

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];
/// Maximum length of an inline list validation source (`"a,b,c"` without quotes).
pub const N_LEN_VALIDATION_LIST_MAX: usize = 255;

////////////////////////////////////////////////////////////////////////////////
// #region Palette

pub const C_COLOR_NAVY: &str = "1B2A4A";
pub const C_COLOR_DARK_BLUE: &str = "2C3E6B";
pub const C_COLOR_MID_BLUE: &str = "3A5BA0";
pub const C_COLOR_PALE_BLUE: &str = "EBF1FA";
pub const C_COLOR_WHITE: &str = "FFFFFF";
pub const C_COLOR_MID_GREY: &str = "D9D9D9";
pub const C_COLOR_DARK_GREY: &str = "404040";

/// House font family.
pub const C_FONT_NAME: &str = "Arial";

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FormatPresets

/// Canonical format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumFmtKey {
    /// Sheet title, first row.
    Title,
    /// Sheet subtitle under the title.
    Subtitle,
    /// Table header row.
    Header,
    /// Table body cell.
    Body,
    /// Bold body text used for field labels.
    Label,
    /// Left-aligned free-text value.
    Value,
    /// Alternate-row fill overlay.
    Shaded,
    /// Totals row.
    Total,
    /// Thousands-separated integer number format overlay.
    Integer,
    /// One-decimal percentage number format overlay.
    Percent,
}

impl EnumFmtKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Header => "header",
            Self::Body => "body",
            Self::Label => "label",
            Self::Value => "value",
            Self::Shaded => "shaded",
            Self::Total => "total",
            Self::Integer => "integer",
            Self::Percent => "percent",
        }
    }
}

fn derive_thin_border_patch() -> SpecCellFormat {
    SpecCellFormat {
        border: Some(1),
        border_color: Some(C_COLOR_MID_GREY.to_string()),
        ..Default::default()
    }
}

/// Build the default named format presets.
///
/// Overlay presets (`Shaded`, `Integer`, `Percent`) only carry the properties
/// they change and are meant to be merged onto a base preset.
pub fn derive_default_xlsx_formats() -> BTreeMap<EnumFmtKey, SpecCellFormat> {
    let cfg_font_base = SpecCellFormat {
        font_name: Some(C_FONT_NAME.to_string()),
        font_size: Some(10),
        font_color: Some(C_COLOR_DARK_GREY.to_string()),
        ..Default::default()
    };

    let cfg_header_base = cfg_font_base
        .with_(SpecCellFormat {
            bold: Some(true),
            align: Some("center".to_string()),
            valign: Some("vcenter".to_string()),
            text_wrap: Some(true),
            ..Default::default()
        })
        .with_(derive_thin_border_patch());

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        EnumFmtKey::Title,
        cfg_font_base.with_(SpecCellFormat {
            font_size: Some(14),
            bold: Some(true),
            font_color: Some(C_COLOR_NAVY.to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Subtitle,
        cfg_font_base.with_(SpecCellFormat {
            font_size: Some(11),
            bold: Some(true),
            font_color: Some(C_COLOR_MID_BLUE.to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Header,
        cfg_header_base.with_(SpecCellFormat {
            font_size: Some(11),
            font_color: Some(C_COLOR_WHITE.to_string()),
            bg_color: Some(C_COLOR_NAVY.to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Body,
        cfg_font_base
            .with_(SpecCellFormat {
                valign: Some("top".to_string()),
                text_wrap: Some(true),
                ..Default::default()
            })
            .with_(derive_thin_border_patch()),
    );
    dict_fmt.insert(
        EnumFmtKey::Label,
        cfg_font_base.with_(SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Value,
        cfg_font_base.with_(SpecCellFormat {
            align: Some("left".to_string()),
            valign: Some("vcenter".to_string()),
            text_wrap: Some(true),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Shaded,
        SpecCellFormat {
            bg_color: Some(C_COLOR_PALE_BLUE.to_string()),
            ..Default::default()
        },
    );
    dict_fmt.insert(
        EnumFmtKey::Total,
        cfg_font_base
            .with_(SpecCellFormat {
                bold: Some(true),
                font_color: Some(C_COLOR_WHITE.to_string()),
                bg_color: Some(C_COLOR_NAVY.to_string()),
                ..Default::default()
            })
            .with_(derive_thin_border_patch()),
    );
    dict_fmt.insert(
        EnumFmtKey::Integer,
        SpecCellFormat {
            num_format: Some("#,##0".to_string()),
            ..Default::default()
        },
    );
    dict_fmt.insert(
        EnumFmtKey::Percent,
        SpecCellFormat {
            num_format: Some("0.0%".to_string()),
            ..Default::default()
        },
    );

    dict_fmt
}

/// Return one preset by key.
pub fn derive_default_xlsx_format(key: EnumFmtKey) -> SpecCellFormat {
    derive_default_xlsx_formats()
        .remove(&key)
        .unwrap_or_default()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_a_preset() {
        let dict_fmt = derive_default_xlsx_formats();
        for key in [
            EnumFmtKey::Title,
            EnumFmtKey::Subtitle,
            EnumFmtKey::Header,
            EnumFmtKey::Body,
            EnumFmtKey::Label,
            EnumFmtKey::Value,
            EnumFmtKey::Shaded,
            EnumFmtKey::Total,
            EnumFmtKey::Integer,
            EnumFmtKey::Percent,
        ] {
            assert!(dict_fmt.contains_key(&key), "missing {}", key.as_str());
        }
    }

    #[test]
    fn header_is_white_bold_on_navy_with_thin_border() {
        let fmt = derive_default_xlsx_format(EnumFmtKey::Header);
        assert_eq!(fmt.font_name.as_deref(), Some("Arial"));
        assert_eq!(fmt.font_size, Some(11));
        assert_eq!(fmt.bold, Some(true));
        assert_eq!(fmt.font_color.as_deref(), Some(C_COLOR_WHITE));
        assert_eq!(fmt.bg_color.as_deref(), Some(C_COLOR_NAVY));
        assert_eq!(fmt.border, Some(1));
        assert_eq!(fmt.border_color.as_deref(), Some(C_COLOR_MID_GREY));
    }

    #[test]
    fn shaded_overlay_keeps_body_font() {
        let dict_fmt = derive_default_xlsx_formats();
        let fmt = dict_fmt[&EnumFmtKey::Body].merge(&dict_fmt[&EnumFmtKey::Shaded]);
        assert_eq!(fmt.font_size, Some(10));
        assert_eq!(fmt.valign.as_deref(), Some("top"));
        assert_eq!(fmt.bg_color.as_deref(), Some(C_COLOR_PALE_BLUE));
    }
}
