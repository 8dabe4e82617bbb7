use portfolio::models::{Experience, ItemList};

pub fn experience() -> ItemList<Experience> {
    ItemList::new(vec![
        Experience {
            role: "Assistant Professor".to_string(),
            organization: "Northgate University".to_string(),
            location: "Northgate, MA".to_string(),
            period: "2021 - Present".to_string(),
            highlights: vec![
                "Lead the Replicated Systems Lab (4 PhD, 6 MSc students)".to_string(),
                "Redesigned the graduate databases course around weekly labs".to_string(),
                "PI on a three-year grant studying causal consistency".to_string(),
            ],
        },
        Experience {
            role: "Postdoctoral Researcher".to_string(),
            organization: "Lakeside Institute of Technology".to_string(),
            location: "Lakeside, WA".to_string(),
            period: "2019 - 2021".to_string(),
            highlights: vec![
                "Built a model checker for replicated key-value stores".to_string(),
                "Co-supervised two MSc theses".to_string(),
            ],
        },
        Experience {
            role: "Software Engineering Intern".to_string(),
            organization: "Cloudline Storage".to_string(),
            location: "Remote".to_string(),
            period: "Summer 2017".to_string(),
            highlights: vec!["Prototyped anti-entropy repair for object metadata".to_string()],
        },
        Experience {
            role: "PhD Candidate".to_string(),
            organization: "Eastbrook University".to_string(),
            location: "Eastbrook, NY".to_string(),
            period: "2014 - 2019".to_string(),
            highlights: vec![
                "Dissertation: Bounded staleness for geo-replicated transactions".to_string(),
                "Teaching assistant for Operating Systems, four semesters".to_string(),
            ],
        },
    ])
}
