//! # Courier Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod delivery;
pub mod discount;
pub mod input;
pub mod package;
pub mod setup;
pub mod vehicle;

// Re-export 主要類型
pub use config::PlanningConfig;
pub use delivery::Delivery;
pub use discount::{DiscountCatalog, DiscountRecord, DiscountType, DiscountValue, ValueRange};
pub use package::{CostEstimate, Package, PackageResult, NO_DISCOUNT_CODE};
pub use setup::{CostSetup, Setup};
pub use vehicle::{AssignedJob, PackageTiming, Vehicle};

/// 配送計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("輸入驗證失敗: {0}")]
    Validation(String),

    #[error("設定不完整：沒有車輛或包裹")]
    IncompleteSetup,

    #[error("找不到折扣碼 {code}（包裹 {package}）")]
    DiscountNotFound { code: String, package: String },

    #[error("找不到包裹: {0}")]
    PackageNotFound(String),

    #[error("找不到配送批次: {0}")]
    DeliveryNotFound(String),

    #[error("尚未規劃配送批次，請先執行規劃")]
    NoDeliveryPlanned,

    #[error("沒有可用車輛")]
    NoVehicleAvailable,

    #[error("包裹 {package} 重量 {weight} 超過車輛最大載重 {max_weight}")]
    PackageOverweight {
        package: String,
        weight: rust_decimal::Decimal,
        max_weight: rust_decimal::Decimal,
    },

    #[error("計算錯誤: {0}")]
    Calculation(String),

    #[error("讀取檔案失敗: {0}")]
    Io(#[from] std::io::Error),
}

impl DeliveryError {
    /// 數值運算溢位
    pub fn overflow(what: impl std::fmt::Display) -> Self {
        Self::Calculation(format!("{what} 數值溢位"))
    }
}

pub type Result<T> = std::result::Result<T, DeliveryError>;
