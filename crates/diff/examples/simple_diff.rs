use line_diff::{diff_lines, ChangeKind, DiffOptions, LineDiffer};

fn main() {
    // Two versions of a buffer, one edit apart
    let previous = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let updated = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    let result = diff_lines(previous, updated);

    println!("Diff statistics:");
    println!("  Changes: {}", result.len());
    println!("  Added lines: {}", result.added_lines());
    println!("  Removed lines: {}", result.removed_lines());
    println!("  Changed lines: {}", result.changed_lines());

    // Color-coded line changes
    println!("\nLine changes:");
    for change in &result {
        match change.kind {
            ChangeKind::Added => println!("  \x1b[32m+ {}: {}\x1b[0m", change.new_line, change.content),
            ChangeKind::Removed => println!(
                "  \x1b[31m- {} (was line {})\x1b[0m",
                change.new_line,
                change.old_line.unwrap_or_default()
            ),
            ChangeKind::Changed => println!("  \x1b[33m~ {}: {}\x1b[0m", change.new_line, change.content),
        }
    }

    // Deleting a line, keeping the removed text
    let differ = LineDiffer::with_options(DiffOptions::default().include_old_content(true));
    let result = differ.diff(updated, previous);

    println!("\nReverting the edit:");
    for change in &result {
        println!(
            "  {} at {}: {:?} (was {:?})",
            change.kind, change.new_line, change.content, change.old_content
        );
    }

    assert_eq!(result.apply(updated), previous);
}
