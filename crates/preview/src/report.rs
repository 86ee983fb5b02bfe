use std::io::{self, Write};

use scrollyt_core::Phase;

use crate::scene::{ElementState, Frame};

fn phase_label(phase: Phase) -> String {
    match phase {
        Phase::Before => "before".to_string(),
        Phase::Active(percent) => format!("{percent}%"),
        Phase::After => "after".to_string(),
    }
}

/// Describe how `current` differs from `previous`, one entry per change.
fn element_changes(previous: Option<&ElementState>, current: &ElementState) -> Vec<String> {
    let mut changes = Vec::new();
    let old_transform = previous.and_then(|p| p.transform.as_deref());
    if let Some(transform) = current.transform.as_deref()
        && old_transform != Some(transform)
    {
        changes.push(format!("{}: {transform}", current.id));
    }

    let old_classes: &[String] = previous.map(|p| p.classes.as_slice()).unwrap_or_default();
    for class in &current.classes {
        if !old_classes.contains(class) {
            changes.push(format!("{} +{class}", current.id));
        }
    }
    for class in old_classes {
        if !current.classes.contains(class) {
            changes.push(format!("{} -{class}", current.id));
        }
    }
    changes
}

/// Print one line per frame in which a phase, transform or class changed.
pub fn print_changes<W: Write>(out: &mut W, frames: &[Frame]) -> io::Result<()> {
    let mut previous: Option<&Frame> = None;
    for frame in frames {
        let mut changes = Vec::new();
        for (index, element) in frame.elements.iter().enumerate() {
            let before = previous.and_then(|p| p.elements.get(index));
            changes.extend(element_changes(before, element));
        }

        let phases_changed = previous.is_none_or(|p| p.phases != frame.phases);
        if phases_changed || !changes.is_empty() {
            let phases: Vec<String> = frame
                .phases
                .iter()
                .map(|(id, phase)| format!("#{}={}", id.get(), phase_label(*phase)))
                .collect();
            writeln!(
                out,
                "offset {:>7.1} | bottom {:>7.1} | {} | {}",
                frame.offset,
                frame.view_bottom,
                phases.join(" "),
                changes.join(", ")
            )?;
        }
        previous = Some(frame);
    }
    Ok(())
}
