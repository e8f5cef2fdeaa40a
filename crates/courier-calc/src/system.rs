//! 配送系統主流程

use courier_core::{
    Delivery, DeliveryError, DiscountCatalog, PackageResult, PlanningConfig, Setup, Vehicle,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::cost::CostCalculator;
use crate::grouping::GroupingEngine;
use crate::scheduling::DeliveryScheduler;
use crate::{PlanSummary, PlanWarning};

/// 配送系統
///
/// 使用方式：
/// 1. 以設定、折扣碼目錄與配置建立系統
/// 2. `plan_delivery()` 依載重上限組成配送批次
/// 3. `assign_deliveries_to_vehicles()` 指派車輛並計價
/// 4. 以 `get_package_by_id()` / `get_delivery_by_id()` 查詢結果
///
/// 或直接呼叫 `run()` 一次完成。
pub struct DeliverySystem {
    setup: Setup,
    config: PlanningConfig,
    cost_calculator: CostCalculator,
    scheduler: DeliveryScheduler,
    sorted_deliveries: Vec<Delivery>,
    results: HashMap<String, PackageResult>,
    warnings: Vec<PlanWarning>,
}

impl DeliverySystem {
    /// 創建新的配送系統
    pub fn new(
        setup: Setup,
        catalog: DiscountCatalog,
        config: PlanningConfig,
    ) -> courier_core::Result<Self> {
        setup.validate()?;
        config.validate()?;

        let cost_calculator =
            CostCalculator::with_config(setup.base_delivery_cost, catalog, &config);
        let scheduler = Self::fresh_scheduler(&setup);

        Ok(Self {
            setup,
            config,
            cost_calculator,
            scheduler,
            sorted_deliveries: Vec::new(),
            results: HashMap::new(),
            warnings: Vec::new(),
        })
    }

    /// 規劃配送批次
    pub fn plan_delivery(&mut self) -> courier_core::Result<&[Delivery]> {
        if self.setup.vehicle_count == 0 || self.setup.packages.is_empty() {
            return Err(DeliveryError::IncompleteSetup);
        }

        let (deliveries, approximate) = GroupingEngine::plan(
            &self.setup.packages,
            self.setup.max_carriable_weight,
            &self.config,
        )?;

        self.warnings.clear();
        if approximate {
            self.warnings.push(PlanWarning::warning(format!(
                "包裹數超過窮舉上限 {}，分組結果為近似解",
                self.config.exhaustive_search_limit
            )));
        }

        self.sorted_deliveries = deliveries;
        self.results.clear();
        Ok(self.sorted_deliveries.as_slice())
    }

    /// 指派批次給車輛並計價
    ///
    /// 每次呼叫都從全新的車隊開始，重複呼叫結果相同。
    pub fn assign_deliveries_to_vehicles(&mut self) -> courier_core::Result<()> {
        if self.sorted_deliveries.is_empty() {
            return Err(DeliveryError::NoDeliveryPlanned);
        }

        let mut scheduler = Self::fresh_scheduler(&self.setup);
        let results = scheduler.assign_all(&self.sorted_deliveries, &self.cost_calculator)?;

        self.scheduler = scheduler;
        self.results = results
            .into_iter()
            .map(|result| (result.name.clone(), result))
            .collect();
        Ok(())
    }

    /// 規劃並指派，回傳計算摘要
    pub fn run(&mut self) -> courier_core::Result<PlanSummary> {
        tracing::info!(
            "開始配送規劃：包裹 {} 筆，車輛 {} 台",
            self.setup.packages.len(),
            self.setup.vehicle_count
        );
        let start_time = std::time::Instant::now();

        self.plan_delivery()?;
        self.assign_deliveries_to_vehicles()?;

        let mut warnings = self.warnings.clone();
        let idle = self.vehicles().iter().filter(|v| v.is_idle()).count();
        if idle > 0 {
            warnings.push(PlanWarning::info(format!("{idle} 台車輛未指派任何批次")));
        }

        let summary = PlanSummary {
            results: self.results(),
            delivery_count: self.sorted_deliveries.len(),
            total_cost: self.total_cost()?,
            warnings,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        };

        tracing::info!("配送規劃完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("配送批次數量: {}", summary.delivery_count);
        Ok(summary)
    }

    /// 依優先順序排列的配送批次
    pub fn sorted_deliveries(&self) -> &[Delivery] {
        &self.sorted_deliveries
    }

    /// 依ID查找配送批次
    pub fn get_delivery_by_id(&self, id: &str) -> Option<&Delivery> {
        self.sorted_deliveries.iter().find(|delivery| delivery.id == id)
    }

    /// 查找批次被指派的車輛
    pub fn vehicle_for_delivery(&self, id: &str) -> courier_core::Result<usize> {
        self.scheduler
            .vehicle_for_delivery(id)
            .ok_or_else(|| DeliveryError::DeliveryNotFound(id.to_string()))
    }

    /// 依名稱查找包裹結果
    ///
    /// 名稱不在設定中回傳 `PackageNotFound`；尚未指派時回傳 `NoDeliveryPlanned`。
    pub fn get_package_by_id(&self, name: &str) -> courier_core::Result<&PackageResult> {
        if self.setup.package(name).is_none() {
            return Err(DeliveryError::PackageNotFound(name.to_string()));
        }
        self.results.get(name).ok_or(DeliveryError::NoDeliveryPlanned)
    }

    /// 所有包裹結果（依設定中的包裹順序）
    pub fn results(&self) -> Vec<PackageResult> {
        self.setup
            .packages
            .iter()
            .filter_map(|pkg| self.results.get(&pkg.name).cloned())
            .collect()
    }

    /// 已計價包裹的折扣後總費用
    pub fn total_cost(&self) -> courier_core::Result<Decimal> {
        self.results.values().try_fold(Decimal::ZERO, |total, result| {
            total
                .checked_add(result.cost)
                .ok_or_else(|| DeliveryError::overflow("總費用"))
        })
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.scheduler.vehicles()
    }

    pub fn warnings(&self) -> &[PlanWarning] {
        &self.warnings
    }

    /// 獲取設定引用
    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    /// 獲取費用計算器引用
    pub fn cost_calculator(&self) -> &CostCalculator {
        &self.cost_calculator
    }

    fn fresh_scheduler(setup: &Setup) -> DeliveryScheduler {
        DeliveryScheduler::with_fleet(
            setup.vehicle_count,
            setup.max_speed,
            setup.max_carriable_weight,
        )
    }
}
