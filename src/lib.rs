//! # Courier
//!
//! 配送費用與配送時間估算：依載重分組、指派車輛、套用折扣計價。

pub use courier_calc as calc;
pub use courier_core as model;

pub use courier_calc::{estimate_costs, CostCalculator, DeliverySystem, PlanSummary};
pub use courier_core::{
    input, CostSetup, DeliveryError, DiscountCatalog, PackageResult, PlanningConfig, Result, Setup,
};

/// 從設定檔與折扣碼目錄檔執行完整配送規劃
pub fn run_from_files(
    setup_path: impl AsRef<std::path::Path>,
    discount_path: impl AsRef<std::path::Path>,
    config: PlanningConfig,
) -> Result<PlanSummary> {
    let setup = input::read_setup(setup_path)?;
    let catalog = input::read_discount_catalog(discount_path)?;
    DeliverySystem::new(setup, catalog, config)?.run()
}

/// 從設定檔與折扣碼目錄檔計算各包裹費用（不排程）
pub fn estimate_from_files(
    setup_path: impl AsRef<std::path::Path>,
    discount_path: impl AsRef<std::path::Path>,
    config: &PlanningConfig,
) -> Result<Vec<courier_core::CostEstimate>> {
    let setup = input::read_cost_setup(setup_path)?;
    let catalog = input::read_discount_catalog(discount_path)?;
    estimate_costs(&setup, catalog, config)
}
