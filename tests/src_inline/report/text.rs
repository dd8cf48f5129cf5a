use super::*;
use crate::model::scenario::{comparison_scenarios, spam_example};

#[test]
fn test_matrix_table_layout() {
    let m = ConfusionMatrix::new(45, 85, 10, 5).unwrap();
    let text = render_matrix_table(&m);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[1], "CONFUSION MATRIX:");
    assert_eq!(lines[4], "ACTUAL  Pos      45      5");
    assert_eq!(lines[5], "        Neg      10     85");
    assert!(text.contains("True positives (TP): 45\n"));
    assert!(text.contains("False negatives (FN): 5\n"));
    assert!(text.ends_with("Total (N): 145\n"));
}

#[test]
fn test_detailed_calculations_spam() {
    let m = ConfusionMatrix::new(45, 85, 10, 5).unwrap();
    let text = render_detailed_calculations(&m);
    assert!(text.contains("1. SENSITIVITY (Recall):"));
    assert!(text.contains("   Calculation: 45 / (45 + 5) = 45 / 50\n"));
    assert!(text.contains("   Result: 0.9000 (90.00%)\n"));
    assert!(text.contains("   Calculation: 85 / (10 + 85) = 85 / 95\n"));
    assert!(text.contains("   Calculation: (45 + 85) / 145 = 130 / 145\n"));
    assert!(text.contains("   Calculation: 45 / (45 + 10) = 45 / 55\n"));
    assert!(text.contains("5. F-SCORE:"));
    assert!(text.contains("   Where P = Precision = 0.8182 and S = Sensitivity = 0.9000\n"));
    assert!(text.contains("   Calculation: 2 x (0.8182 x 0.9000) / (0.8182 + 0.9000)\n"));
    assert!(text.contains("   Result: 0.8571 (85.71%)\n"));
}

#[test]
fn test_summary_lines_in_order() {
    let m = ConfusionMatrix::new(40, 40, 10, 10).unwrap();
    let text = render_summary(&m);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Sensitivity (Recall)     : 0.8000 (80.00%)");
    assert_eq!(lines[4], "F-score                  : 0.8000 (80.00%)");
}

#[test]
fn test_zero_matrix_report_marks_undefined() {
    let m = ConfusionMatrix::new(0, 0, 0, 0).unwrap();
    let text = render_summary(&m);
    assert_eq!(text.matches("[undefined]").count(), 5);
}

#[test]
fn test_full_report_sections() {
    let text = render_report_text(&spam_example());
    let idx = |needle: &str| text.find(needle).unwrap();
    assert!(idx("CONFUSION MATRIX:") < idx("DETAILED METRIC CALCULATIONS:"));
    assert!(idx("DETAILED METRIC CALCULATIONS:") < idx("METRIC SUMMARY:"));
    assert!(idx("METRIC SUMMARY:") < idx("INTERPRETATION:"));
    assert!(text.contains("* F-score: harmonic mean of precision and sensitivity\n"));
}

#[test]
fn test_comparison_compact_values() {
    let text = render_comparison_text(&comparison_scenarios());
    assert!(text.contains("SCENARIO: High precision\n"));
    assert!(text.contains("  Precision           : 0.857 (85.7%)\n"));
    assert!(text.contains("  Sensitivity (Recall): 0.667 (66.7%)\n"));
}
