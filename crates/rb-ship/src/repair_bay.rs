//! Repair bay page.

use crate::systems::ShipSystem;

const PAGE_HEAD: &str = "<!DOCTYPE html>
<html>
<head>
    <title>Repair</title>
</head>
<body>
    <div class=\"anchor-point\">";

const PAGE_TAIL: &str = "</div>
</body>
</html>
";

/// Minimal HTML page exposing the repair code in the `anchor-point` div.
pub fn render_repair_bay(system: ShipSystem) -> String {
    let code = system.repair_code();
    let mut page = String::with_capacity(PAGE_HEAD.len() + code.len() + PAGE_TAIL.len());
    page.push_str(PAGE_HEAD);
    page.push_str(code);
    page.push_str(PAGE_TAIL);
    page
}
