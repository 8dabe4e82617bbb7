use portfolio::models::{Certification, ItemList};

fn certification(title: &str, provider: &str) -> Certification {
    Certification {
        title: title.to_string(),
        provider: provider.to_string(),
    }
}

pub fn certifications() -> ItemList<Certification> {
    ItemList::new(vec![
        certification("Certified Kubernetes Application Developer", "The Linux Foundation"),
        certification("AWS Certified Solutions Architect - Associate", "Amazon Web Services"),
        certification("Professional Cloud Database Engineer", "Google Cloud"),
        certification("Teaching in Higher Education Certificate", "Northgate University"),
        certification("Research Data Management", "Digital Curation Centre"),
    ])
}
