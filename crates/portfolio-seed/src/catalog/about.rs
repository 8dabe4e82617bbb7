//! Contact and biography fields for the `about` document.

use portfolio::models::About;

pub fn about() -> About {
    About {
        name: "Dr. Elena Marsh".to_string(),
        title: "Assistant Professor of Computer Science".to_string(),
        affiliation: "Department of Computer Science, Northgate University".to_string(),
        email: "elena.marsh@northgate.edu".to_string(),
        phone: "+1 (555) 014-2231".to_string(),
        location: "Room 412, Hollis Engineering Building".to_string(),
        website: "https://elenamarsh.dev".to_string(),
        github: "https://github.com/emarsh".to_string(),
        linkedin: "https://www.linkedin.com/in/elena-marsh".to_string(),
        bio: "I study distributed data systems, with a focus on consistency models \
              for geo-replicated storage and the tooling that helps engineers reason \
              about them. I teach databases and operating systems at the undergraduate \
              and graduate level."
            .to_string(),
    }
}
