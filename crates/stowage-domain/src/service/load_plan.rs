//! Load planning service
//!
//! Offers a manifest of items to a carrier in order and reports what fit.

use serde::Serialize;

use stowage_types::{CapacityKind, CargoItem, Error, Result};

use crate::model::Carrier;

/// Outcome for a single offered item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadOutcome {
    Loaded,
    Rejected(CapacityKind),
}

/// One manifest entry and what happened to it
#[derive(Debug, Clone, Serialize)]
pub struct LoadPlanEntry {
    pub item: CargoItem,
    pub outcome: LoadOutcome,
}

/// Result of offering a manifest to a carrier
#[derive(Debug, Serialize)]
pub struct LoadPlan {
    pub carrier_id: String,
    pub max_weight: u32,
    pub max_volume: f64,
    pub entries: Vec<LoadPlanEntry>,
    pub loaded: usize,
    pub rejected: usize,
    pub final_weight: u32,
    pub final_volume: f64,
}

/// Offer each item in order; rejected items are recorded and the run continues
pub fn plan_load(carrier: &mut Carrier, items: Vec<CargoItem>) -> Result<LoadPlan> {
    let mut entries = Vec::with_capacity(items.len());

    for item in items {
        let entry_item = item.clone();
        let outcome = match carrier.load(item) {
            Ok(()) => LoadOutcome::Loaded,
            Err(Error::CapacityExceeded { kind, .. }) => LoadOutcome::Rejected(kind),
            Err(e) => return Err(e),
        };
        entries.push(LoadPlanEntry {
            item: entry_item,
            outcome,
        });
    }

    let loaded = entries
        .iter()
        .filter(|e| e.outcome == LoadOutcome::Loaded)
        .count();
    let rejected = entries.len() - loaded;

    Ok(LoadPlan {
        carrier_id: carrier.id().to_string(),
        max_weight: carrier.max_weight(),
        max_volume: carrier.max_volume(),
        entries,
        loaded,
        rejected,
        final_weight: carrier.current_weight(),
        final_volume: carrier.current_volume(),
    })
}

pub fn generate_load_report(plan: &LoadPlan) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                Load Plan Report                  \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Carrier:        {}\n", plan.carrier_id));
    report.push_str(&format!("  Items offered:  {}\n", plan.entries.len()));
    report.push_str(&format!("  Loaded:         {}\n", plan.loaded));
    report.push_str(&format!("  Rejected:       {}\n", plan.rejected));
    report.push_str(&format!(
        "  Final weight:   {} / {} kg ({:.1}%)\n",
        plan.final_weight,
        plan.max_weight,
        utilization(plan.final_weight as f64, plan.max_weight as f64)
    ));
    report.push_str(&format!(
        "  Final volume:   {:.2} / {:.2} m³ ({:.1}%)\n",
        plan.final_volume,
        plan.max_volume,
        utilization(plan.final_volume, plan.max_volume)
    ));
    report.push('\n');

    if plan.rejected > 0 {
        report.push_str("[Rejected Items]\n");
        report.push_str("-".repeat(60).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<14} {:<8} {:>10} {:>10}  {}\n",
            "ID", "Kind", "Weight", "Volume", "Reason"
        ));
        report.push_str("-".repeat(60).as_str());
        report.push('\n');
        for entry in &plan.entries {
            if let LoadOutcome::Rejected(kind) = entry.outcome {
                report.push_str(&format!(
                    "{:<14} {:<8} {:>8} kg {:>10.2}  over {}\n",
                    truncate(entry.item.id(), 13),
                    entry.item.kind().label(),
                    entry.item.weight(),
                    entry.item.volume(),
                    kind
                ));
            }
        }
        report.push('\n');
    } else {
        report.push_str("[No Rejected Items]\n");
        report.push_str("  Every offered item fits within the carrier caps.\n\n");
    }

    report.push_str("==================================================\n");
    report
}

fn utilization(current: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (current / max) * 100.0
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", kept)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FleetRegistry;
    use crate::service::claims::CarrierClaims;

    fn staging_carrier(max_weight: u32, max_volume: f64) -> Carrier {
        let fleet = FleetRegistry::new("staging", CarrierClaims::new()).unwrap();
        Carrier::new("SIM-1", max_weight, max_volume, &fleet).unwrap()
    }

    #[test]
    fn test_plan_all_loaded() {
        let mut carrier = staging_carrier(10000, 50.0);
        let items = vec![
            CargoItem::pallet("P001", 5, 10.0).unwrap(),
            CargoItem::bulk("V001", 10, 20.0).unwrap(),
        ];

        let plan = plan_load(&mut carrier, items).unwrap();
        assert_eq!(plan.loaded, 2);
        assert_eq!(plan.rejected, 0);
        assert_eq!(plan.final_weight, 15);
        assert!((plan.final_volume - 30.0).abs() < 0.01);
        assert!(plan
            .entries
            .iter()
            .all(|e| e.outcome == LoadOutcome::Loaded));
    }

    #[test]
    fn test_plan_rejects_and_continues() {
        let mut carrier = staging_carrier(100, 10.0);
        let items = vec![
            CargoItem::bulk("A", 60, 2.0).unwrap(),
            CargoItem::bulk("B", 60, 2.0).unwrap(),
            CargoItem::bulk("C", 30, 2.0).unwrap(),
        ];

        let plan = plan_load(&mut carrier, items).unwrap();
        assert_eq!(plan.loaded, 2);
        assert_eq!(plan.rejected, 1);
        assert_eq!(plan.final_weight, 90);
        assert_eq!(
            plan.entries[1].outcome,
            LoadOutcome::Rejected(CapacityKind::Weight)
        );
        assert_eq!(plan.entries[2].outcome, LoadOutcome::Loaded);
    }

    #[test]
    fn test_plan_reports_weight_before_volume() {
        let mut carrier = staging_carrier(100, 10.0);
        let items = vec![CargoItem::bulk("HUGE", 500, 90.0).unwrap()];

        let plan = plan_load(&mut carrier, items).unwrap();
        assert_eq!(
            plan.entries[0].outcome,
            LoadOutcome::Rejected(CapacityKind::Weight)
        );
    }

    #[test]
    fn test_report_contents() {
        let mut carrier = staging_carrier(100, 10.0);
        let items = vec![
            CargoItem::bulk("A", 60, 2.0).unwrap(),
            CargoItem::bulk("LONG-ITEM-ID-B", 60, 2.0).unwrap(),
        ];

        let plan = plan_load(&mut carrier, items).unwrap();
        let report = generate_load_report(&plan);
        assert!(report.contains("Load Plan Report"));
        assert!(report.contains("Loaded:         1"));
        assert!(report.contains("Rejected:       1"));
        assert!(report.contains("over weight"));
    }

    #[test]
    fn test_report_without_rejections() {
        let mut carrier = staging_carrier(10000, 50.0);
        let items = vec![CargoItem::bulk("V001", 10, 20.0).unwrap()];

        let plan = plan_load(&mut carrier, items).unwrap();
        let report = generate_load_report(&plan);
        assert!(report.contains("No Rejected Items"));
    }

    #[test]
    fn test_plan_serializes() {
        let mut carrier = staging_carrier(100, 10.0);
        let items = vec![
            CargoItem::bulk("A", 60, 2.0).unwrap(),
            CargoItem::bulk("B", 60, 2.0).unwrap(),
        ];

        let plan = plan_load(&mut carrier, items).unwrap();
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["loaded"], 1);
        assert_eq!(value["rejected"], 1);
        assert_eq!(value["entries"][0]["outcome"], "Loaded");
        assert_eq!(value["entries"][1]["outcome"]["Rejected"], "Weight");
    }
}
