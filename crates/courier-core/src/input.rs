//! 輸入解析與驗證
//!
//! 設定檔格式（以空白分隔）：
//!
//! ```text
//! <base_delivery_cost> <package_count>
//! <name> <weight> <distance> <discount_code>   # 共 package_count 行
//! <vehicle_count> <max_speed> <max_carriable_weight>   # 僅配送時間模式
//! ```
//!
//! 折扣碼目錄為 JSON 陣列，見 [`DiscountCatalog`]。

use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::{CostSetup, DeliveryError, DiscountCatalog, Package, Result, Setup};

/// 解析配送時間模式的設定文字
pub fn parse_setup(text: &str) -> Result<Setup> {
    let lines = content_lines(text);
    let (base_delivery_cost, package_count) = parse_header(&lines)?;

    if lines.len().checked_sub(2) != Some(package_count) {
        return Err(DeliveryError::Validation(format!(
            "預期 {} 個包裹（另含表頭與車隊行），實際 {} 行",
            package_count,
            lines.len().saturating_sub(2)
        )));
    }

    let packages = parse_packages(&lines[1..=package_count])?;

    let fleet = tokens(lines[package_count + 1], 3, "車隊設定")?;
    let vehicle_count = parse_count(fleet[0], "車輛數量")?;
    let max_speed = parse_decimal(fleet[1], "車速")?;
    let max_carriable_weight = parse_decimal(fleet[2], "最大載重")?;

    let setup = Setup::new(
        base_delivery_cost,
        packages,
        vehicle_count,
        max_speed,
        max_carriable_weight,
    );
    setup.validate()?;
    Ok(setup)
}

/// 解析總費用模式的設定文字（無車隊行）
pub fn parse_cost_setup(text: &str) -> Result<CostSetup> {
    let lines = content_lines(text);
    let (base_delivery_cost, package_count) = parse_header(&lines)?;

    if lines.len().checked_sub(1) != Some(package_count) {
        return Err(DeliveryError::Validation(format!(
            "預期 {} 個包裹，實際 {} 行",
            package_count,
            lines.len().saturating_sub(1)
        )));
    }

    let setup = CostSetup::new(base_delivery_cost, parse_packages(&lines[1..])?);
    setup.validate()?;
    Ok(setup)
}

/// 解析折扣碼目錄 JSON
pub fn parse_discount_catalog(json: &str) -> Result<DiscountCatalog> {
    serde_json::from_str(json)
        .map_err(|e| DeliveryError::Validation(format!("折扣碼目錄格式錯誤: {e}")))
}

/// 讀取配送時間模式設定檔
pub fn read_setup(path: impl AsRef<Path>) -> Result<Setup> {
    parse_setup(&std::fs::read_to_string(path)?)
}

/// 讀取總費用模式設定檔
pub fn read_cost_setup(path: impl AsRef<Path>) -> Result<CostSetup> {
    parse_cost_setup(&std::fs::read_to_string(path)?)
}

/// 讀取折扣碼目錄檔
pub fn read_discount_catalog(path: impl AsRef<Path>) -> Result<DiscountCatalog> {
    parse_discount_catalog(&std::fs::read_to_string(path)?)
}

fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn parse_header(lines: &[&str]) -> Result<(Decimal, usize)> {
    let first = lines
        .first()
        .ok_or_else(|| DeliveryError::Validation("設定內容為空".to_string()))?;
    let header = tokens(first, 2, "表頭")?;
    Ok((
        parse_decimal(header[0], "基本配送費用")?,
        parse_count(header[1], "包裹數量")?,
    ))
}

fn parse_packages(lines: &[&str]) -> Result<Vec<Package>> {
    lines
        .iter()
        .map(|line| {
            let fields = tokens(line, 4, "包裹")?;
            Ok(Package::new(
                fields[0].to_string(),
                parse_decimal(fields[1], "包裹重量")?,
                parse_decimal(fields[2], "包裹距離")?,
                fields[3].to_string(),
            ))
        })
        .collect()
}

fn tokens<'a>(line: &'a str, expected: usize, label: &str) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != expected {
        return Err(DeliveryError::Validation(format!(
            "{label}欄位數錯誤（預期 {expected} 個）: {line}"
        )));
    }
    Ok(fields)
}

fn parse_decimal(token: &str, label: &str) -> Result<Decimal> {
    Decimal::from_str(token)
        .map_err(|_| DeliveryError::Validation(format!("{label}不是有效數字: {token}")))
}

fn parse_count(token: &str, label: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| DeliveryError::Validation(format!("{label}必須是非負整數: {token}")))
}
