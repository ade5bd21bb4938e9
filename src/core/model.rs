//! Shop data model
//!
//! Items deserialize straight from the source CSV columns; the shop table is
//! the formatted, column-projected result handed to the renderer and the
//! file writers. Nothing here is mutated after construction.

use serde::{Deserialize, Deserializer};

/// One source row. Numeric cells that fail to parse deserialize to `None`
/// and render as the sentinel `--` instead of aborting the run.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    #[serde(rename = "Name")]
    pub name: String,

    /// Base price in gold pieces.
    #[serde(rename = "Price (gp)", deserialize_with = "lenient_number")]
    pub price: Option<f64>,

    /// Base weight in pounds.
    #[serde(rename = "Weight (lb.)", deserialize_with = "lenient_number")]
    pub weight: Option<f64>,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Properties")]
    pub properties: Option<String>,

    #[serde(rename = "AC", deserialize_with = "lenient_number")]
    pub ac: Option<f64>,

    #[serde(rename = "Damage")]
    pub damage: Option<String>,

    /// Semicolon-delimited tag list, kept raw until filtering.
    #[serde(rename = "Tags", default)]
    pub tags: String,

    #[serde(rename = "Source")]
    pub source: String,
}

/// Deserialize a numeric cell, coercing empty or unparseable values to
/// `None` rather than failing the whole load.
fn lenient_number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite()))
}

/// Output columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Price,
    Weight,
    Ac,
    Damage,
    Properties,
    Category,
    Source,
}

impl Column {
    pub fn title(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Price => "Price",
            Column::Weight => "Weight",
            Column::Ac => "AC",
            Column::Damage => "Damage",
            Column::Properties => "Properties",
            Column::Category => "Category",
            Column::Source => "Source",
        }
    }
}

/// Select the output columns for the requested display toggles. Name, Price,
/// and Weight always lead; Category and Source always trail.
pub fn project_columns(armor: bool, weapon: bool) -> Vec<Column> {
    let mut columns = vec![Column::Name, Column::Price, Column::Weight];
    if armor {
        columns.push(Column::Ac);
    }
    if weapon {
        columns.push(Column::Damage);
    }
    if armor || weapon {
        columns.push(Column::Properties);
    }
    columns.push(Column::Category);
    columns.push(Column::Source);
    columns
}

/// The final shop: ordered columns plus rows of already-formatted cells.
#[derive(Debug, Clone)]
pub struct ShopTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl ShopTable {
    pub fn titles(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.title()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
