//! # OpenSCAD Printer
//!
//! Renders a [`GeometryNode`] tree as OpenSCAD source: one statement per
//! line, tab indentation, named arguments, operations with children written
//! as `{ ... }` blocks.
//!
//! ```text
//! difference() {
//!     cube(size = [10, 10, 10]);
//!     translate(v = [5, 5, -1]) {
//!         cylinder(h = 12, d = 4);
//!     }
//! }
//! ```

use crate::error::CsgError;
use crate::geometry::GeometryNode;

/// Print a tree as OpenSCAD source. The result ends with a newline unless
/// the tree is empty.
pub fn print(node: &GeometryNode) -> Result<String, CsgError> {
    let mut out = String::new();
    print_node(node, 0, &mut out)?;
    Ok(out)
}

fn print_node(node: &GeometryNode, depth: usize, out: &mut String) -> Result<(), CsgError> {
    let name = node.name();
    match node {
        GeometryNode::Cube { size } => {
            let stmt = format!("cube(size = {});", print_vec(name, size)?);
            push_line(out, depth, &stmt);
        }
        GeometryNode::Cylinder { height, radius } => {
            let stmt = format!(
                "cylinder(h = {}, d = {});",
                print_num(name, *height)?,
                print_num(name, radius * 2.0)?
            );
            push_line(out, depth, &stmt);
        }
        GeometryNode::Text { text, size } => {
            let stmt = format!(
                "text(text = {}, size = {}, halign = \"center\", valign = \"center\");",
                print_string(text),
                print_num(name, *size)?
            );
            push_line(out, depth, &stmt);
        }
        GeometryNode::Translate { offset, child } => {
            let head = format!("translate(v = {})", print_vec(name, offset)?);
            print_block(&head, std::slice::from_ref(child.as_ref()), depth, out)?;
        }
        GeometryNode::Rotate { angles, child } => {
            let head = format!("rotate(a = {})", print_vec(name, angles)?);
            print_block(&head, std::slice::from_ref(child.as_ref()), depth, out)?;
        }
        GeometryNode::LinearExtrude { height, child } => {
            let head = format!("linear_extrude(height = {})", print_num(name, *height)?);
            print_block(&head, std::slice::from_ref(child.as_ref()), depth, out)?;
        }
        GeometryNode::Union { children } => print_block("union()", children, depth, out)?,
        GeometryNode::Difference { children } => print_block("difference()", children, depth, out)?,
        GeometryNode::Empty => {}
    }
    Ok(())
}

fn print_block(
    head: &str,
    children: &[GeometryNode],
    depth: usize,
    out: &mut String,
) -> Result<(), CsgError> {
    push_line(out, depth, &format!("{} {{", head));
    for child in children {
        print_node(child, depth + 1, out)?;
    }
    push_line(out, depth, "}");
    Ok(())
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push('\t');
    }
    out.push_str(line);
    out.push('\n');
}

/// Shortest round-trip decimal form; `-0` prints as `0`.
pub(crate) fn print_num(node: &'static str, value: f64) -> Result<String, CsgError> {
    if !value.is_finite() {
        return Err(CsgError::NonFinite { node, value });
    }
    if value == 0.0 {
        return Ok("0".to_string());
    }
    Ok(value.to_string())
}

fn print_vec(node: &'static str, values: &[f64]) -> Result<String, CsgError> {
    let parts = values
        .iter()
        .map(|v| print_num(node, *v))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", parts.join(", ")))
}

fn print_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

// =============================================================================
// TESTS
// =============================================================================
