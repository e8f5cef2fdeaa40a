//! 折扣解析

use courier_core::{
    DeliveryError, DiscountCatalog, DiscountRecord, DiscountType, DiscountValue, NO_DISCOUNT_CODE,
};
use rust_decimal::Decimal;

/// 折扣解析器
#[derive(Debug, Clone)]
pub struct DiscountResolver {
    catalog: DiscountCatalog,
}

impl DiscountResolver {
    /// 創建新的折扣解析器
    pub fn new(catalog: DiscountCatalog) -> Self {
        Self { catalog }
    }

    /// 依折扣碼查找折扣記錄
    ///
    /// "NA" 回傳 `None`；其他找不到的折扣碼回傳 `DiscountNotFound`。
    pub fn resolve(
        &self,
        code: &str,
        package_name: &str,
    ) -> courier_core::Result<Option<&DiscountRecord>> {
        if code == NO_DISCOUNT_CODE {
            return Ok(None);
        }

        self.catalog.find(code).map(Some).ok_or_else(|| {
            tracing::error!("包裹 {} 的折扣碼 {} 不存在", package_name, code);
            DeliveryError::DiscountNotFound {
                code: code.to_string(),
                package: package_name.to_string(),
            }
        })
    }

    /// 計算折扣金額
    ///
    /// 距離與重量都落在區間內（含邊界）才給折扣，否則為 0。
    /// 折扣值須已通過目錄驗證（0 到 100）。
    pub fn discount_amount(
        record: &DiscountRecord,
        distance: Decimal,
        weight: Decimal,
        delivery_cost: Decimal,
    ) -> Decimal {
        if !record.applies_to(distance, weight) {
            return Decimal::ZERO;
        }

        match (record.terms.discount_type, record.terms.value) {
            (_, DiscountValue::NotApplicable) => Decimal::ZERO,
            (DiscountType::Fixed, DiscountValue::Amount(value)) => value,
            (DiscountType::Percentage, DiscountValue::Amount(value)) => {
                // 比例不超過 1，乘積不會大於配送費用
                delivery_cost * (value / Decimal::ONE_HUNDRED)
            }
            (DiscountType::NotApplicable, _) => Decimal::ZERO,
        }
    }

    pub fn catalog(&self) -> &DiscountCatalog {
        &self.catalog
    }
}
