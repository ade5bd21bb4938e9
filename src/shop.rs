//! Shop pipeline
//!
//! Filters the loaded items, converts prices and weights into their chosen
//! denominations, and projects the result into the final shop table.

use anyhow::Result;
use log::info;

use crate::core::model::{project_columns, Column, Item, ShopTable};
use crate::core::numfmt::{format_number, format_opt_number, format_opt_str};
use crate::core::tags::{parse_tags, TagFilter};
use crate::core::units::{select, UnitTable};

/// Display options for building the shop table.
#[derive(Debug, Clone, Copy)]
pub struct ShopOptions {
    pub sigfigs: u32,
    pub free: bool,
    pub armor: bool,
    pub weapon: bool,
}

/// Filter items by tags, preserving source order.
pub fn filter_items(items: Vec<Item>, filter: &TagFilter) -> Vec<Item> {
    if filter.is_empty() {
        return items;
    }
    let before = items.len();
    let kept: Vec<Item> = items
        .into_iter()
        .filter(|item| filter.keep(&parse_tags(&item.tags)))
        .collect();
    info!("tag filters kept {} of {} items", kept.len(), before);
    kept
}

/// Build the shop table: one formatted row per item, projected onto the
/// columns selected by the display toggles.
pub fn build_shop(
    items: &[Item],
    currency: &UnitTable,
    weight: &UnitTable,
    opts: &ShopOptions,
) -> Result<ShopTable> {
    let columns = project_columns(opts.armor, opts.weapon);
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let mut row = Vec::with_capacity(columns.len());
        for column in &columns {
            let cell = match column {
                Column::Name => item.name.clone(),
                Column::Price => convert_cell(item.price, currency, opts.sigfigs, !opts.free)?,
                Column::Weight => convert_cell(item.weight, weight, opts.sigfigs, false)?,
                Column::Ac => format_opt_number(item.ac),
                Column::Damage => format_opt_str(item.damage.as_deref()),
                Column::Properties => format_opt_str(item.properties.as_deref()),
                Column::Category => item.category.clone(),
                Column::Source => item.source.clone(),
            };
            row.push(cell);
        }
        rows.push(row);
    }
    Ok(ShopTable { columns, rows })
}

/// Convert a raw base-unit value into its display string: denomination plus
/// label, plain fixed-point when the table is empty, `--` when the source
/// cell was absent or unparseable.
fn convert_cell(
    value: Option<f64>,
    units: &UnitTable,
    sigfigs: u32,
    forbid_zero: bool,
) -> Result<String> {
    let Some(value) = value else {
        return Ok("--".to_string());
    };
    let denom = select(value, units, sigfigs, forbid_zero)?;
    if denom.unit.is_empty() {
        Ok(format!("{:.*}", sigfigs as usize, denom.quantity))
    } else {
        Ok(format!(
            "{} {}",
            format_number(denom.quantity, sigfigs),
            denom.unit
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{STANDARD_CURRENCY, STANDARD_WEIGHT};

    fn item(name: &str, price: Option<f64>, weight: Option<f64>, tags: &str) -> Item {
        Item {
            name: name.to_string(),
            price,
            weight,
            category: "Weapons".to_string(),
            properties: None,
            ac: None,
            damage: None,
            tags: tags.to_string(),
            source: "PHB".to_string(),
        }
    }

    fn options() -> ShopOptions {
        ShopOptions {
            sigfigs: 1,
            free: false,
            armor: false,
            weapon: false,
        }
    }

    #[test]
    fn test_price_conversion_end_to_end() {
        let items = vec![
            item("Sword", Some(3.0), Some(3.0), "weapons"),
            item("Dart", Some(0.1), Some(0.25), "weapons"),
            item("Pebble", Some(0.0), Some(0.0), "misc"),
        ];
        let shop = build_shop(&items, &STANDARD_CURRENCY, &STANDARD_WEIGHT, &options()).unwrap();

        let prices: Vec<_> = shop.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(prices, ["3 gp", "1 sp", "1 cp"]);
    }

    #[test]
    fn test_weight_may_be_zero() {
        let items = vec![item("Feather", Some(1.0), Some(0.0), "misc")];
        let shop = build_shop(&items, &STANDARD_CURRENCY, &STANDARD_WEIGHT, &options()).unwrap();
        assert_eq!(shop.rows[0][2], "0 oz");
    }

    #[test]
    fn test_free_flag_allows_zero_price() {
        let items = vec![item("Pebble", Some(0.0), Some(0.0), "misc")];
        let mut opts = options();
        opts.free = true;
        let shop = build_shop(&items, &STANDARD_CURRENCY, &STANDARD_WEIGHT, &opts).unwrap();
        assert_eq!(shop.rows[0][1], "0 cp");
    }

    #[test]
    fn test_missing_price_renders_sentinel() {
        let items = vec![item("Oddity", None, None, "misc")];
        let shop = build_shop(&items, &STANDARD_CURRENCY, &STANDARD_WEIGHT, &options()).unwrap();
        assert_eq!(shop.rows[0][1], "--");
        assert_eq!(shop.rows[0][2], "--");
    }

    #[test]
    fn test_empty_unit_table_renders_plain_decimal() {
        let items = vec![item("Sword", Some(15.0), Some(3.5), "weapons")];
        let empty = UnitTable::new();
        let shop = build_shop(&items, &empty, &empty, &options()).unwrap();
        assert_eq!(shop.rows[0][1], "15.0");
        assert_eq!(shop.rows[0][2], "3.5");
    }

    #[test]
    fn test_filter_items_keeps_source_order() {
        let items = vec![
            item("Sword", Some(3.0), Some(3.0), "weapons;metal"),
            item("Pony", Some(30.0), Some(600.0), "mounts"),
            item("Club", Some(0.1), Some(2.0), "weapons"),
        ];
        let own = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let filter = TagFilter::new(&own(&["weapons"]), &[], &[]);
        let kept = filter_items(items, &filter);
        let names: Vec<_> = kept.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Sword", "Club"]);
    }
}
