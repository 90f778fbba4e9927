use crate::constants::{TIP_ELLIPSIS, TIP_ICON, TIP_MAX_CHARS};
use crate::domain::{StudentRecord, Tip};
use tracing::info;

/// Rule ladder standing in for a generative model: one fixed sentence
/// per GPA band, interpolating name and course. Evaluated top-down,
/// first match wins.
pub fn generate_tip(name: &str, course: &str, gpa: f64) -> String {
    let tip = if gpa >= 9.0 {
        format!("Congratulations, {name}! Your performance in {course} is excellent. Consider diving into a research topic or mentoring classmates to consolidate your knowledge.")
    } else if gpa >= 8.0 {
        format!("Great work, {name}! Keep your focus on {course}. Try reviewing your study materials more frequently to reach excellence.")
    } else if gpa >= 7.0 {
        format!("{name}, you are on the right track in {course}. Identify the most challenging areas and put extra time into them. Consistency is the key!")
    } else {
        format!("Hello, {name}. In {course} it is crucial to reassess your study strategy. Ask professors or tutors for help to improve your GPA. Do not give up!")
    };
    truncate_tip(tip)
}

/// Cut to the first `TIP_MAX_CHARS` characters and append the marker.
/// The marker goes on after the cut, so the result may exceed the
/// limit by the marker's length.
fn truncate_tip(tip: String) -> String {
    if tip.chars().count() > TIP_MAX_CHARS {
        let cut: String = tip.chars().take(TIP_MAX_CHARS).collect();
        format!("{cut}{TIP_ELLIPSIS}")
    } else {
        tip
    }
}

/// Append a generated tip to every record and return the mutated batch.
pub fn attach_tips(mut records: Vec<StudentRecord>) -> Vec<StudentRecord> {
    for record in &mut records {
        let description = generate_tip(&record.name, &record.course, record.current_gpa);
        info!("Generated tip for {}: {}", record.name, description);
        println!("Generated tip for {}: {}", record.name, description);
        record.tips.push(Tip {
            icon: TIP_ICON.to_string(),
            description,
        });
    }
    records
}
