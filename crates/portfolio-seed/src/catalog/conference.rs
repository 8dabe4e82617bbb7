//! Program for the workshop on replicated data systems.

use portfolio::models::{ItemList, ProgramSession};

fn session(day: &str, time: &str, title: &str, speaker: &str, track: &str) -> ProgramSession {
    ProgramSession {
        day: day.to_string(),
        time: time.to_string(),
        title: title.to_string(),
        speaker: speaker.to_string(),
        track: track.to_string(),
    }
}

pub fn conference_program() -> ItemList<ProgramSession> {
    ItemList::new(vec![
        session("Day 1", "09:00", "Opening Remarks", "Dr. Elena Marsh", "Plenary"),
        session(
            "Day 1",
            "09:30",
            "Keynote: Twenty Years of Eventual Consistency",
            "Prof. Samuel Okafor",
            "Plenary",
        ),
        session(
            "Day 1",
            "11:00",
            "Verifying Replication Protocols with TLA+",
            "Dr. Hannah Lindqvist",
            "Formal Methods",
        ),
        session(
            "Day 1",
            "14:00",
            "Causal Consistency at the Edge",
            "Dr. Elena Marsh",
            "Systems",
        ),
        session("Day 2", "09:30", "Student Lightning Talks", "Various", "Research"),
        session(
            "Day 2",
            "11:00",
            "Panel: Teaching Distributed Systems",
            "Panelists",
            "Education",
        ),
        session("Day 2", "16:00", "Closing and Best Paper Award", "Program Committee", "Plenary"),
    ])
}
