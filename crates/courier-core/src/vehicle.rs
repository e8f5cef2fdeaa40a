//! 車輛模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{DeliveryError, Result};

/// 包裹在某趟配送中的時間
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageTiming {
    pub package_name: String,

    /// 單程時間（距離 / 車速，未取整）
    pub trip_time: Decimal,

    /// 送達時間（車輛既有累計時間 + 單程時間，取兩位小數）
    pub delivery_time: Decimal,
}

/// 已指派給車輛的配送工作
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedJob {
    pub delivery_id: String,

    /// 來回時間
    pub round_trip_time: Decimal,

    pub packages: Vec<PackageTiming>,
}

/// 配送車輛
///
/// 累計來回時間只增不減；工作只能由排程器附加。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// 車輛ID（從 0 開始）
    pub id: usize,

    /// 最高車速
    pub max_speed: Decimal,

    /// 最大載重
    pub max_weight: Decimal,

    jobs: Vec<AssignedJob>,

    cumulative_round_trip_time: Decimal,
}

impl Vehicle {
    /// 創建新的車輛
    pub fn new(id: usize, max_speed: Decimal, max_weight: Decimal) -> Self {
        Self {
            id,
            max_speed,
            max_weight,
            jobs: Vec::new(),
            cumulative_round_trip_time: Decimal::ZERO,
        }
    }

    /// 建立車隊（ID 依序為 0..count）
    pub fn fleet(count: usize, max_speed: Decimal, max_weight: Decimal) -> Vec<Self> {
        (0..count)
            .map(|id| Self::new(id, max_speed, max_weight))
            .collect()
    }

    /// 附加工作並累加來回時間
    ///
    /// 累計時間溢位時回傳 `Calculation` 錯誤，車輛狀態不變。
    pub fn push_job(&mut self, job: AssignedJob) -> Result<()> {
        self.cumulative_round_trip_time = self
            .cumulative_round_trip_time
            .checked_add(job.round_trip_time)
            .ok_or_else(|| DeliveryError::overflow(format!("車輛 {} 累計時間", self.id)))?;
        self.jobs.push(job);
        Ok(())
    }

    pub fn jobs(&self) -> &[AssignedJob] {
        &self.jobs
    }

    /// 累計來回時間
    pub fn cumulative_round_trip_time(&self) -> Decimal {
        self.cumulative_round_trip_time
    }

    /// 檢查是否尚未指派任何工作
    pub fn is_idle(&self) -> bool {
        self.jobs.is_empty()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_fleet_ids() {
        let fleet = Vehicle::fleet(3, Decimal::from(70), Decimal::from(200));

        assert_eq!(fleet.len(), 3);
        assert_eq!(fleet.iter().map(|v| v.id).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(fleet.iter().all(Vehicle::is_idle));
    }

    #[test]
    fn test_push_job_accumulates() {
        let mut vehicle = Vehicle::new(0, Decimal::from(70), Decimal::from(200));

        vehicle.push_job(AssignedJob {
            delivery_id: "PKG3".to_string(),
            round_trip_time: Decimal::from_str("2.84").unwrap(),
            packages: vec![PackageTiming {
                package_name: "PKG3".to_string(),
                trip_time: Decimal::from_str("1.42").unwrap(),
                delivery_time: Decimal::from_str("1.42").unwrap(),
            }],
        })
        .unwrap();
        vehicle
            .push_job(AssignedJob {
                delivery_id: "PKG5".to_string(),
                round_trip_time: Decimal::from_str("2.70").unwrap(),
                packages: Vec::new(),
            })
            .unwrap();

        assert!(!vehicle.is_idle());
        assert_eq!(vehicle.jobs().len(), 2);
        assert_eq!(
            vehicle.cumulative_round_trip_time(),
            Decimal::from_str("5.54").unwrap()
        );
        assert_eq!(vehicle.jobs()[0].packages[0].package_name, "PKG3");
    }

    #[test]
    fn test_push_job_overflow_keeps_state() {
        let mut vehicle = Vehicle::new(0, Decimal::from(70), Decimal::from(200));
        let job = |round_trip_time| AssignedJob {
            delivery_id: "BIG".to_string(),
            round_trip_time,
            packages: Vec::new(),
        };

        vehicle.push_job(job(Decimal::MAX)).unwrap();
        let result = vehicle.push_job(job(Decimal::ONE));

        assert!(matches!(result, Err(DeliveryError::Calculation(_))));
        assert_eq!(vehicle.jobs().len(), 1);
        assert_eq!(vehicle.cumulative_round_trip_time(), Decimal::MAX);
    }
}
