use portfolio::models::{ItemList, Reference};

pub fn references() -> ItemList<Reference> {
    ItemList::new(vec![
        Reference {
            name: "Prof. Samuel Okafor".to_string(),
            position: "Professor of Computer Science".to_string(),
            institution: "Eastbrook University".to_string(),
            email: "s.okafor@eastbrook.edu".to_string(),
            relationship: "PhD advisor".to_string(),
        },
        Reference {
            name: "Dr. Hannah Lindqvist".to_string(),
            position: "Principal Investigator".to_string(),
            institution: "Lakeside Institute of Technology".to_string(),
            email: "hlindqvist@lakeside-tech.edu".to_string(),
            relationship: "Postdoctoral supervisor".to_string(),
        },
        Reference {
            name: "Priya Raman".to_string(),
            position: "Engineering Manager".to_string(),
            institution: "Cloudline Storage".to_string(),
            email: "priya.raman@cloudline.io".to_string(),
            relationship: "Internship manager".to_string(),
        },
    ])
}
