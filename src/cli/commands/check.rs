use anyhow::Result;
use std::path::Path;

use refute::Property;

use crate::cli::commands::load_property;
use crate::cli::ui;

/// Input contract checking command
pub fn execute(property_path: &Path) -> Result<()> {
    ui::print_header("Checking Property");

    let property = match load_property(property_path) {
        Ok(property) => property,
        Err(e) => {
            ui::print_error(&e.to_string());
            return Err(e.into());
        }
    };

    ui::print_success("Property satisfies the input contract");
    ui::print_result("Root connective", property.kind());
    ui::print_result("Nodes", &property.node_count().to_string());
    println!();
    ui::print_text(&property.to_string());

    // Empty binder tokens are legal only on quantifiers synthesized during
    // challenge generation; in external input they usually mean the
    // expansion step dropped something.
    let empty_binders = count_empty_binders(&property);
    if empty_binders > 0 {
        ui::print_warning(
            format!(
                "{} quantifier(s) carry empty binder tokens; expected only on synthesized challenges",
                empty_binders
            )
            .as_str(),
        );
    }

    Ok(())
}

fn count_empty_binders(property: &Property) -> usize {
    match property {
        Property::ForAll {
            variable,
            range,
            body,
        }
        | Property::Exists {
            variable,
            range,
            body,
        } => {
            let here = if variable.is_empty() || range.is_empty() {
                1
            } else {
                0
            };
            here + count_empty_binders(body)
        }
        Property::And(operands) | Property::Or(operands) => {
            operands.iter().map(count_empty_binders).sum()
        }
        Property::Not(operand) => count_empty_binders(operand),
        Property::Atomic { .. } => 0,
    }
}
