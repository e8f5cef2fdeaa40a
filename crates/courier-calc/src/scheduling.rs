//! 車輛排程

use courier_core::{AssignedJob, Delivery, DeliveryError, PackageResult, PackageTiming, Vehicle};
use rust_decimal::Decimal;

use crate::cost::CostCalculator;

/// 配送排程器（擁有車隊）
///
/// 每個批次依優先順序指派給累計來回時間最少的車輛；時間相同時取 ID 最小者。
#[derive(Debug, Clone)]
pub struct DeliveryScheduler {
    vehicles: Vec<Vehicle>,
}

impl DeliveryScheduler {
    /// 創建新的排程器
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// 以同規格車隊創建排程器
    pub fn with_fleet(count: usize, max_speed: Decimal, max_weight: Decimal) -> Self {
        Self::new(Vehicle::fleet(count, max_speed, max_weight))
    }

    /// 依序指派所有批次
    pub fn assign_all(
        &mut self,
        deliveries: &[Delivery],
        cost_calculator: &CostCalculator,
    ) -> courier_core::Result<Vec<PackageResult>> {
        assign_deliveries_to_vehicles(deliveries, &mut self.vehicles, cost_calculator)
    }

    /// 指派單一批次
    pub fn assign(
        &mut self,
        delivery: &Delivery,
        cost_calculator: &CostCalculator,
    ) -> courier_core::Result<Vec<PackageResult>> {
        assign_delivery(&mut self.vehicles, delivery, cost_calculator)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn into_vehicles(self) -> Vec<Vehicle> {
        self.vehicles
    }

    /// 查找批次被指派的車輛
    pub fn vehicle_for_delivery(&self, delivery_id: &str) -> Option<usize> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.jobs().iter().any(|job| job.delivery_id == delivery_id))
            .map(|vehicle| vehicle.id)
    }
}

/// 依優先順序把批次指派給車輛
///
/// 直接累加傳入車隊的時間：對已指派過的車隊再次呼叫會重複計算。
pub fn assign_deliveries_to_vehicles(
    deliveries: &[Delivery],
    vehicles: &mut [Vehicle],
    cost_calculator: &CostCalculator,
) -> courier_core::Result<Vec<PackageResult>> {
    if deliveries.is_empty() {
        return Err(DeliveryError::NoDeliveryPlanned);
    }

    let mut results = Vec::new();
    for delivery in deliveries {
        results.extend(assign_delivery(vehicles, delivery, cost_calculator)?);
    }
    Ok(results)
}

/// 把單一批次指派給目前負載最輕的車輛
///
/// 所有包裹先完成計價與計時才寫入車輛，任何失敗時車隊狀態不變。
pub fn assign_delivery(
    vehicles: &mut [Vehicle],
    delivery: &Delivery,
    cost_calculator: &CostCalculator,
) -> courier_core::Result<Vec<PackageResult>> {
    let vehicle = least_loaded(vehicles)?;
    let committed = vehicle.cumulative_round_trip_time();
    let round_trip_time = round_trip_time(delivery.max_distance, vehicle.max_speed)?;

    let mut timings = Vec::with_capacity(delivery.len());
    let mut results = Vec::with_capacity(delivery.len());

    for pkg in &delivery.packages {
        let trip_time = trip_time(pkg.distance, vehicle.max_speed)?;
        let delivery_time = delivery_time(committed, trip_time)?;
        let breakdown = cost_calculator.cost(pkg)?;

        timings.push(PackageTiming {
            package_name: pkg.name.clone(),
            trip_time,
            delivery_time,
        });
        results.push(PackageResult {
            name: pkg.name.clone(),
            delivery_id: delivery.id.clone(),
            vehicle_id: vehicle.id,
            cost: breakdown.discounted,
            discount: breakdown.discount_value,
            trip_time,
            delivery_time,
        });
    }

    vehicle.push_job(AssignedJob {
        delivery_id: delivery.id.clone(),
        round_trip_time,
        packages: timings,
    })?;

    tracing::debug!(
        "批次 {} → 車輛 {}（來回 {}，累計 {} → {}）",
        delivery.id,
        vehicle.id,
        round_trip_time,
        committed,
        vehicle.cumulative_round_trip_time()
    );

    Ok(results)
}

/// 累計來回時間最少的車輛，同時間取第一台（ID 最小）
fn least_loaded(vehicles: &mut [Vehicle]) -> courier_core::Result<&mut Vehicle> {
    vehicles
        .iter_mut()
        .min_by_key(|vehicle| vehicle.cumulative_round_trip_time())
        .ok_or(DeliveryError::NoVehicleAvailable)
}

/// 單程時間 = 距離 / 車速（不取整）
pub fn trip_time(distance: Decimal, max_speed: Decimal) -> courier_core::Result<Decimal> {
    distance
        .checked_div(max_speed)
        .ok_or_else(|| DeliveryError::Calculation(format!("無法以車速 {max_speed} 計算時間")))
}

/// 來回時間 = floor(最遠距離 / 車速 × 100) × 2 / 100，截斷至四位小數
pub fn round_trip_time(
    max_distance: Decimal,
    max_speed: Decimal,
) -> courier_core::Result<Decimal> {
    let one_way = trip_time(max_distance, max_speed)?;
    let doubled = one_way
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|hundredths| hundredths.floor())
        .and_then(|hundredths| hundredths.checked_mul(Decimal::TWO))
        .ok_or_else(|| DeliveryError::overflow("來回時間"))?;
    Ok((doubled / Decimal::ONE_HUNDRED).trunc_with_scale(4))
}

/// 送達時間 = floor((車輛既有累計時間 + 單程時間) × 100) / 100，截斷至兩位小數
pub fn delivery_time(committed: Decimal, trip_time: Decimal) -> courier_core::Result<Decimal> {
    let hundredths = committed
        .checked_add(trip_time)
        .and_then(|time| time.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| DeliveryError::overflow("送達時間"))?;
    Ok((hundredths.floor() / Decimal::ONE_HUNDRED).trunc_with_scale(2))
}
