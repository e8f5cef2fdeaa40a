//! 配送時間估算示例
//!
//! 用法：cargo run --example delivery_time [設定檔] [折扣碼目錄]

use courier::PlanningConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args().skip(1);
    let setup_path = args.next().unwrap_or_else(|| data_file("delivery-setup.txt"));
    let discount_path = args.next().unwrap_or_else(|| data_file("discount-codes.json"));

    println!("=== 配送時間估算示例 ===\n");

    let summary = courier::run_from_files(&setup_path, &discount_path, PlanningConfig::default())?;

    for result in &summary.results {
        println!("{result}");
    }

    println!("\n配送批次: {}", summary.delivery_count);
    println!("總費用: {}", summary.total_cost);
    for warning in &summary.warnings {
        println!("[{:?}] {}", warning.severity, warning.message);
    }

    Ok(())
}

fn data_file(name: &str) -> String {
    format!("{}/demos/data/{name}", env!("CARGO_MANIFEST_DIR"))
}
