//! 總費用計算示例
//!
//! 用法：cargo run --example total_cost [設定檔] [折扣碼目錄]

use courier::PlanningConfig;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args().skip(1);
    let setup_path = args.next().unwrap_or_else(|| data_file("cost-setup.txt"));
    let discount_path = args.next().unwrap_or_else(|| data_file("discount-codes.json"));

    println!("=== 總費用計算示例 ===\n");

    let estimates =
        courier::estimate_from_files(&setup_path, &discount_path, &PlanningConfig::default())?;

    for estimate in &estimates {
        println!("{estimate}");
    }

    let total = estimates
        .iter()
        .try_fold(Decimal::ZERO, |total, e| total.checked_add(e.cost))
        .ok_or_else(|| anyhow::anyhow!("總費用數值溢位"))?;
    println!("\n總費用: {total}");

    Ok(())
}

fn data_file(name: &str) -> String {
    format!("{}/demos/data/{name}", env!("CARGO_MANIFEST_DIR"))
}
