//! Plain-text parameter summary appended to generated files.

use crate::assembly::Assembly;

/// One block per tower with its inputs and derived dimensions, followed by
/// the harmonized assembly envelope.
pub fn parameter_report(assembly: &Assembly) -> String {
    let mut out = String::new();
    out.push_str("Resolved parameters (mm, degrees)\n");

    for placed in assembly.towers() {
        let tower = &placed.tower;
        let spec = tower.spec();
        out.push_str(&format!("\n[{}] at x = {}\n", spec.label(), placed.x_offset));
        out.push_str(&format!(
            "  battery_diameter = {}\n  battery_height = {}\n  {} = {}\n",
            spec.battery_diameter(),
            spec.battery_height(),
            spec.slot_count().field_name(),
            spec.slot_count().slots()
        ));
        out.push_str(&format!(
            "  battery_clearance = {}\n  battery_protrusion = {}\n",
            spec.battery_clearance(),
            spec.battery_protrusion()
        ));
        out.push_str(&format!(
            "  slot_margin = {}\n  slot_angle = {}\n  tower_bottom_margin = {}\n",
            spec.slot_margin(),
            spec.slot_angle(),
            spec.tower_bottom_margin()
        ));
        out.push_str(&format!(
            "  grabby_slot_diameter = {}\n  grabby_slot_offset = {}\n",
            spec.grabby_slot_diameter(),
            spec.grabby_slot_offset()
        ));
        out.push_str(&format!(
            "  slot = {:.2} x {:.2} x {:.2}\n  tower_width = {:.2}\n",
            tower.slot_width(),
            tower.slot_depth(),
            tower.slot_height(),
            tower.width()
        ));
    }

    out.push_str(&format!(
        "\nAssembly: {:.2} wide, {:.2} deep, {:.2} tall\n",
        assembly.width(),
        assembly.depth(),
        assembly.height()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::StorageConfig;
    use crate::table::coin_cell_definition;

    #[test]
    fn test_report_lists_every_tower() {
        let assembly = Assembly::build(&StorageConfig::new(coin_cell_definition())).unwrap();
        let report = parameter_report(&assembly);
        assert!(report.contains("[CR1632] at x = 0"));
        assert!(report.contains("[CR2025] at x = 21"));
        assert!(report.contains("min_battery_count = 10"));
        assert!(report.contains("Assembly: 46.00 wide, 18.00 deep, 66.50 tall"));
    }
}
