use super::model::{CareerPosition, CareersPage, EmploymentType};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The careers page served when neither the CMS nor the static document
/// yields a valid page.
pub fn fallback_careers() -> CareersPage {
    CareersPage {
        heading: "Build The Future With Zenture IT".into(),
        subheading: "Join our team to work on meaningful software, AI, and IoT products.".into(),
        positions: vec![
            CareerPosition {
                id: "frontend-engineer-01".into(),
                title: "Frontend Engineer (React)".into(),
                department: "Engineering".into(),
                location: "Remote / India".into(),
                employment_type: EmploymentType::FullTime,
                experience: "2-4 years".into(),
                summary: "Build performant web experiences and collaborate closely with design and backend teams.".into(),
                requirements: lines(&[
                    "Strong React and TypeScript fundamentals",
                    "Experience with responsive UI and accessibility",
                    "Good understanding of API integration and state management",
                ]),
                responsibilities: lines(&[
                    "Develop and maintain reusable frontend components",
                    "Translate Figma and product requirements into production UI",
                    "Optimize performance and improve front-end quality",
                ]),
                apply_url: "mailto:careers@zenture.in?subject=Application%20-%20Frontend%20Engineer".into(),
                posted_date: "2026-02-20".into(),
            },
            CareerPosition {
                id: "backend-engineer-01".into(),
                title: "Backend Engineer (Node.js)".into(),
                department: "Engineering".into(),
                location: "Hybrid / Pune".into(),
                employment_type: EmploymentType::FullTime,
                experience: "3-6 years".into(),
                summary: "Design and implement robust backend services powering our client-facing products.".into(),
                requirements: lines(&[
                    "Hands-on Node.js and relational databases",
                    "Experience with REST APIs and service-oriented architecture",
                    "Knowledge of cloud deployment workflows",
                ]),
                responsibilities: lines(&[
                    "Build secure APIs and service integrations",
                    "Maintain backend performance and observability",
                    "Work with frontend and DevOps teams for releases",
                ]),
                apply_url: "mailto:careers@zenture.in?subject=Application%20-%20Backend%20Engineer".into(),
                posted_date: "2026-02-18".into(),
            },
            CareerPosition {
                id: "fullstack-developer-01".into(),
                title: "Full Stack Developer (Full-Time & Internship)".into(),
                department: "Engineering".into(),
                location: "Remote / Hybrid".into(),
                employment_type: EmploymentType::FullTime,
                experience: "Internship / 1-4 years".into(),
                summary: "Build scalable web applications across frontend and backend, collaborate with product teams, and support cloud deployments for production-ready solutions.".into(),
                requirements: lines(&[
                    "Hands-on experience with modern JavaScript/TypeScript frameworks",
                    "Good understanding of REST APIs, databases, and backend architecture",
                    "Familiarity with cloud platforms and deployment workflows",
                ]),
                responsibilities: lines(&[
                    "Develop and maintain end-to-end web features from UI to APIs",
                    "Collaborate with design and QA teams to ship high-quality releases",
                    "Contribute to performance, security, and maintainability improvements",
                ]),
                apply_url: "mailto:careers@zenture.in?subject=Application%20-%20Full%20Stack%20Developer".into(),
                posted_date: "2026-02-27".into(),
            },
        ],
    }
}
