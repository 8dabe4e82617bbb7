use portfolio::models::{ItemList, Skill};

fn skill(name: &str, category: &str, level: &str) -> Skill {
    Skill {
        name: name.to_string(),
        category: category.to_string(),
        level: level.to_string(),
    }
}

pub fn skills() -> ItemList<Skill> {
    ItemList::new(vec![
        skill("Rust", "Programming", "Advanced"),
        skill("Python", "Programming", "Advanced"),
        skill("C", "Programming", "Intermediate"),
        skill("TLA+", "Formal Methods", "Intermediate"),
        skill("PostgreSQL", "Databases", "Advanced"),
        skill("Distributed Consensus", "Systems", "Advanced"),
        skill("Statistical Analysis (R)", "Research Methods", "Intermediate"),
        skill("LaTeX", "Academic Writing", "Advanced"),
        skill("Curriculum Design", "Teaching", "Advanced"),
    ])
}
