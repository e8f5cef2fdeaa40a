//! # Courier Calculation Engine
//!
//! 核心配送計算引擎：分組、排程、計價

pub mod cost;
pub mod discount;
pub mod grouping;
pub mod scheduling;
pub mod subset_sum;
pub mod system;

// Re-export 主要類型
pub use cost::{estimate_costs, CostBreakdown, CostCalculator};
pub use discount::DiscountResolver;
pub use grouping::{group_to_capacity, plan_delivery, CapacityGroups, GroupingEngine};
pub use scheduling::{assign_deliveries_to_vehicles, DeliveryScheduler};
pub use subset_sum::{max_subset_sum, WeightedItem};
pub use system::DeliverySystem;

/// 配送規劃結果
#[derive(Debug, Clone)]
pub struct PlanSummary {
    /// 包裹結果（依設定順序）
    pub results: Vec<courier_core::PackageResult>,

    /// 配送批次數量
    pub delivery_count: usize,

    /// 折扣後總費用
    pub total_cost: rust_decimal::Decimal,

    /// 警告信息
    pub warnings: Vec<PlanWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

/// 規劃警告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanWarning {
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(message: String, severity: WarningSeverity) -> Self {
        Self { message, severity }
    }

    pub fn info(message: String) -> Self {
        Self::new(message, WarningSeverity::Info)
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}
