//! Compiled-in copy used whenever the CMS has nothing usable.

use super::icons::IconKey;
use super::schema::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn nav(name: &str, href: &str) -> NavLink {
    NavLink {
        name: name.into(),
        href: href.into(),
    }
}

fn about_value(icon: &str, title: &str, description: &str) -> AboutValue {
    AboutValue {
        icon: IconKey::from(icon),
        title: title.into(),
        description: description.into(),
    }
}

fn service(icon: &str, title: &str, description: &str, color: &str) -> ServiceItem {
    ServiceItem {
        icon: IconKey::from(icon),
        title: title.into(),
        description: description.into(),
        color: color.into(),
    }
}

fn feature(icon: &str, title: &str, description: &str) -> IotFeature {
    IotFeature {
        icon: IconKey::from(icon),
        title: title.into(),
        description: description.into(),
    }
}

fn achievement(icon: &str, title: &str, description: &str) -> ResearchAchievement {
    ResearchAchievement {
        icon: IconKey::from(icon),
        title: title.into(),
        description: description.into(),
    }
}

fn portfolio_item(
    id: u32,
    title: &str,
    category: &str,
    description: &str,
    tags: &[&str],
    icon: &str,
    gradient: &str,
) -> PortfolioItem {
    PortfolioItem {
        id,
        title: title.into(),
        category: category.into(),
        description: description.into(),
        tags: strings(tags),
        icon: IconKey::from(icon),
        gradient: gradient.into(),
        is_active: Some(true),
        live_url: Some("#".into()),
        repo_url: Some("#".into()),
    }
}

struct PostSeed<'a> {
    id: u32,
    title: &'a str,
    excerpt: &'a str,
    author: &'a str,
    date: &'a str,
    read_time: &'a str,
    category: &'a str,
    slug: &'a str,
    meta_title: &'a str,
    meta_description: &'a str,
    content: &'a str,
}

impl From<PostSeed<'_>> for BlogPost {
    fn from(seed: PostSeed<'_>) -> Self {
        BlogPost {
            id: seed.id,
            title: seed.title.into(),
            excerpt: seed.excerpt.into(),
            author: seed.author.into(),
            date: seed.date.into(),
            read_time: seed.read_time.into(),
            category: seed.category.into(),
            slug: seed.slug.into(),
            content: Some(seed.content.into()),
            meta_title: Some(seed.meta_title.into()),
            meta_description: Some(seed.meta_description.into()),
        }
    }
}

fn testimonial(id: u32, name: &str, position: &str, organization: &str, content: &str) -> TestimonialItem {
    TestimonialItem {
        id,
        name: name.into(),
        position: position.into(),
        organization: organization.into(),
        content: content.into(),
        rating: 5,
    }
}

fn stat(number: &str, label: &str) -> TestimonialStat {
    TestimonialStat {
        number: number.into(),
        label: label.into(),
    }
}

pub fn default_navbar_links() -> Vec<NavLink> {
    vec![
        nav("Home", "/#home"),
        nav("About", "/#about"),
        nav("Services", "/#services"),
        nav("Portfolio", "/#portfolio"),
        nav("Careers", "/careers"),
        nav("Contact", "/#contact"),
    ]
}

pub fn default_about() -> AboutContent {
    AboutContent {
        title_prefix: "About".into(),
        title_highlight: "Zenture IT".into(),
        subtitle: "Pioneering digital transformation through innovative technology solutions".into(),
        years_value: "15+".into(),
        years_label: "Years of Excellence".into(),
        paragraph1: "Zenture IT Solutions is a leading software development company specializing in creating innovative digital solutions that drive business growth and transformation.".into(),
        paragraph2: "With expertise spanning web development, mobile applications, IoT, and AI, we empower organizations to harness the full potential of technology.".into(),
        highlights: strings(&[
            "Expert team of developers and engineers",
            "Agile development methodology",
            "End-to-end project management",
            "24/7 technical support and maintenance",
        ]),
        values: vec![
            about_value(
                "target",
                "Our Mission",
                "To deliver cutting-edge technology solutions that empower businesses to achieve their digital ambitions.",
            ),
            about_value(
                "lightbulb",
                "Innovation",
                "Constantly exploring new technologies and methodologies to stay ahead of the curve.",
            ),
            about_value(
                "rocket",
                "Excellence",
                "Committed to delivering the highest quality solutions that exceed client expectations.",
            ),
        ],
    }
}

pub fn default_services() -> ServicesContent {
    ServicesContent {
        title_prefix: "Our".into(),
        title_highlight: "Services".into(),
        subtitle: "Comprehensive technology solutions to power your digital transformation".into(),
        cta_text: "Start Your Project".into(),
        cta_href: "#contact".into(),
        items: vec![
            service(
                "globe",
                "Web Development",
                "Create stunning, responsive websites and web applications that drive engagement and deliver exceptional user experiences.",
                "from-cyan-500 to-blue-500",
            ),
            service(
                "code",
                "Software Development",
                "Custom software solutions tailored to your business needs, built with modern technologies and best practices.",
                "from-blue-500 to-purple-500",
            ),
            service(
                "smartphone",
                "Mobile App Development",
                "Native and cross-platform mobile applications for iOS and Android that provide seamless user experiences.",
                "from-purple-500 to-pink-500",
            ),
            service(
                "cpu",
                "IoT Development",
                "Connect physical devices to the digital world with innovative IoT solutions that transform how businesses operate.",
                "from-pink-500 to-red-500",
            ),
            service(
                "brain",
                "AI Solutions",
                "Harness the power of artificial intelligence and machine learning to automate processes and gain valuable insights.",
                "from-red-500 to-orange-500",
            ),
            service(
                "lightbulb",
                "IT Consultation",
                "Expert technology consulting to help you make informed decisions and develop strategic technology roadmaps.",
                "from-orange-500 to-yellow-500",
            ),
        ],
    }
}

pub fn default_iot() -> IotContent {
    IotContent {
        title_prefix: "Full Spectrum".into(),
        title_highlight: "Technology Solutions".into(),
        subtitle: "Connecting the physical and digital worlds through innovative Internet of Things solutions".into(),
        implementation_title: "Enterprise Field Implementation".into(),
        implementation_description: "We design, build, and deploy resilient digital systems that perform reliably in enterprise, industrial, and government-grade environments.".into(),
        application_area_title: "IoT Application Areas".into(),
        features: vec![
            feature("cpu", "Edge Computing", "Process data closer to the source for faster insights"),
            feature("wifi", "Connectivity", "Multi-protocol support for seamless device integration"),
            feature("database", "Data Analytics", "Real-time data processing and visualization"),
            feature("shield", "Security", "Enterprise-grade encryption and security protocols"),
            feature("cloud", "Cloud Integration", "Seamless cloud connectivity and data synchronization"),
            feature("zap", "Automation", "Intelligent automation and remote monitoring"),
        ],
        use_cases: strings(&[
            "Smart Agriculture",
            "Industrial Automation",
            "Smart Cities",
            "Healthcare Monitoring",
            "Environmental Sensing",
            "Asset Tracking",
            "Energy Management",
            "Supply Chain",
        ]),
    }
}

pub fn default_portfolio() -> PortfolioContent {
    PortfolioContent {
        title_prefix: "Our".into(),
        title_highlight: "Portfolio".into(),
        subtitle: "Explore our successful projects that have transformed businesses and delivered exceptional results".into(),
        categories: strings(&[
            "All",
            "Web Application",
            "Mobile Application",
            "IoT Solution",
            "AI/ML Solution",
            "Enterprise Software",
        ]),
        cta_text: "Start Your Project".into(),
        cta_href: "#contact".into(),
        items: vec![
            portfolio_item(
                1,
                "Army Communication System",
                "Enterprise Software",
                "Secure real-time communication platform for military operations with end-to-end encryption.",
                &["React", "Node.js", "WebRTC", "Security"],
                "code2",
                "from-cyan-500 to-blue-600",
            ),
            portfolio_item(
                2,
                "Forest Management Portal",
                "Web Application",
                "Comprehensive wildlife tracking and forest resource management system with GIS integration.",
                &["Angular", "Python", "MongoDB", "GIS"],
                "globe",
                "from-green-500 to-emerald-600",
            ),
            portfolio_item(
                3,
                "Records Verification App",
                "Mobile Application",
                "Digital platform for Guinness World Records verification and management processes.",
                &["Flutter", "Firebase", "AI/ML"],
                "smartphone",
                "from-purple-500 to-pink-600",
            ),
        ],
    }
}

pub fn default_blog() -> BlogContent {
    let posts = vec![
        PostSeed {
            id: 1,
            title: "AI in Software Development: Practical Use Cases That Improve Delivery Speed",
            excerpt: "A practical guide to using AI in software development workflows for faster releases, better quality, and lower engineering cost.",
            author: "Zenture Team",
            date: "2026-02-20",
            read_time: "8 min read",
            category: "AI & ML",
            slug: "ai-in-software-development-practical-use-cases",
            meta_title: "AI in Software Development: Use Cases, Tools, and ROI | Zenture",
            meta_description: "Learn how AI and ML improve software delivery with test automation, code review intelligence, and predictive planning.",
            content: "Artificial intelligence is now a practical engineering accelerator, not a future concept. Teams use AI-assisted coding for faster scaffolding, test generation for better QA coverage, and log anomaly detection to reduce production incidents. The highest ROI often comes from combining AI with disciplined engineering practices: clear architecture boundaries, quality gates, and measurable delivery metrics.",
        },
        PostSeed {
            id: 2,
            title: "Building Scalable IoT Platforms: Architecture Patterns for Reliability",
            excerpt: "Design principles for IoT systems that support growth, secure device onboarding, and real-time analytics at scale.",
            author: "Zenture IoT Team",
            date: "2026-02-18",
            read_time: "9 min read",
            category: "IoT",
            slug: "building-scalable-iot-platforms-architecture-patterns",
            meta_title: "Scalable IoT Architecture Patterns for Enterprise Systems | Zenture",
            meta_description: "Discover how to architect secure and scalable IoT platforms with edge processing, event pipelines, and resilient cloud services.",
            content: "Scalable IoT architecture starts with clear separation between device communication, event processing, and application services. Use secure provisioning for every device identity, message brokers for decoupled ingestion, and stream processing for near-real-time decisions. For enterprise systems, edge computing reduces latency and cloud egress cost, while central observability keeps the fleet healthy.",
        },
        PostSeed {
            id: 3,
            title: "Mobile App Development in 2026: Performance, Security, and UX Priorities",
            excerpt: "Key strategies for shipping fast, secure, and user-centric mobile apps across Android and iOS.",
            author: "Zenture Mobile Team",
            date: "2026-02-15",
            read_time: "7 min read",
            category: "Mobile Development",
            slug: "mobile-app-development-2026-performance-security-ux",
            meta_title: "Mobile App Development 2026: Performance, Security, UX | Zenture",
            meta_description: "Learn modern mobile development practices for high performance, secure architecture, and better app retention.",
            content: "Modern mobile development balances speed to market with long-term product quality. High-performing apps prioritize startup optimization, network efficiency, and responsive UI states. Security remains non-negotiable: secure token storage, certificate pinning where needed, and strict API authorization controls.",
        },
        PostSeed {
            id: 4,
            title: "Cloud Computing Best Practices for Cost Optimization and Resilience",
            excerpt: "How to structure cloud architecture for high availability while controlling infrastructure spend.",
            author: "Zenture Cloud Team",
            date: "2026-02-12",
            read_time: "8 min read",
            category: "Cloud Computing",
            slug: "cloud-computing-best-practices-cost-optimization-resilience",
            meta_title: "Cloud Best Practices: Cost Optimization and Resilience | Zenture",
            meta_description: "A practical cloud strategy for scalable systems: right-sized compute, observability, and resilient deployment pipelines.",
            content: "Cloud architecture maturity comes from balancing resilience and cost efficiency. Start with workload profiling and right-size compute resources based on real usage patterns. For resilience, design with failure domains in mind: multi-zone deployment, health checks, and rollback-ready CI/CD pipelines.",
        },
        PostSeed {
            id: 5,
            title: "Web Application Security Checklist for Modern Engineering Teams",
            excerpt: "A practical security checklist covering authentication, API hardening, and deployment safeguards.",
            author: "Zenture Security Team",
            date: "2026-02-09",
            read_time: "10 min read",
            category: "Security",
            slug: "web-application-security-checklist-modern-engineering-teams",
            meta_title: "Web App Security Checklist: Authentication, API, DevSecOps | Zenture",
            meta_description: "Strengthen your web application security with practical controls across authentication, API hardening, and secure delivery pipelines.",
            content: "Application security is most effective when integrated into delivery workflows. Start with robust identity controls: strong session management, MFA for privileged users, and token lifecycle policies. API hardening should include schema validation, rate limiting, and explicit authorization checks at every sensitive boundary.",
        },
        PostSeed {
            id: 6,
            title: "Modern Software Development Lifecycle: Faster Delivery Without Quality Tradeoffs",
            excerpt: "How high-performing teams combine agile planning, engineering standards, and automation for reliable releases.",
            author: "Zenture Engineering",
            date: "2026-02-06",
            read_time: "9 min read",
            category: "Development",
            slug: "modern-software-development-lifecycle-faster-delivery",
            meta_title: "Modern SDLC: Faster Delivery With High Quality | Zenture",
            meta_description: "Build a modern software development lifecycle with automation, quality gates, and release confidence at scale.",
            content: "A modern SDLC is defined by tight feedback loops, strong quality gates, and predictable release motion. Agile planning works best when paired with clear definition of done, enforceable coding standards, and automated testing at multiple levels.",
        },
    ];

    BlogContent {
        title_prefix: "Latest".into(),
        title_highlight: "Insights".into(),
        subtitle: "Stay updated with the latest trends, insights, and best practices in technology".into(),
        categories: strings(&[
            "All",
            "AI & ML",
            "IoT",
            "Mobile Development",
            "Cloud Computing",
            "Security",
            "Development",
        ]),
        posts: posts.into_iter().map(BlogPost::from).collect(),
    }
}

pub fn default_research() -> ResearchContent {
    ResearchContent {
        title_prefix: "Research &".into(),
        title_highlight: "Innovation".into(),
        subtitle: "Pushing the boundaries of technology through cutting-edge research and development".into(),
        lab_title: "State-of-the-Art Research Facilities".into(),
        lab_description: "Our advanced research lab equipped with cutting-edge technology for IoT, AI, and embedded systems development".into(),
        publication_section_title: "Recent Publications".into(),
        areas: vec![
            ResearchArea {
                icon: IconKey::Beaker,
                title: "AI & Machine Learning".into(),
                description: "Exploring advanced neural networks, natural language processing, and computer vision applications.".into(),
                publications: 8,
                color: "from-cyan-500 to-blue-500".into(),
            },
            ResearchArea {
                icon: IconKey::TrendingUp,
                title: "IoT & Edge Computing".into(),
                description: "Research on low-power IoT devices, edge AI, and distributed computing architectures.".into(),
                publications: 6,
                color: "from-blue-500 to-purple-500".into(),
            },
            ResearchArea {
                icon: IconKey::Users,
                title: "Human-Computer Interaction".into(),
                description: "Studying user experience patterns, accessibility, and intuitive interface design.".into(),
                publications: 5,
                color: "from-purple-500 to-pink-500".into(),
            },
        ],
        publications: vec![
            ResearchPublication {
                title: "Optimizing Edge AI for Low-Power IoT Devices".into(),
                journal: "IEEE Transactions on IoT".into(),
                year: "2025".into(),
                authors: "Zenture Research Team".into(),
                kind: "Conference Paper".into(),
            },
            ResearchPublication {
                title: "Neural Network Architectures for Real-Time Object Detection".into(),
                journal: "International Journal of Computer Vision".into(),
                year: "2025".into(),
                authors: "AI Research Division".into(),
                kind: "Journal Article".into(),
            },
        ],
        achievements: vec![
            achievement("award", "Best Paper Award", "IEEE International Conference on IoT 2025"),
            achievement("bookOpen", "25+ Publications", "In leading journals and conferences"),
            achievement("users", "Industry Collaborations", "Partnerships with top universities"),
        ],
    }
}

pub fn default_testimonials() -> TestimonialsContent {
    TestimonialsContent {
        title_prefix: "Client".into(),
        title_highlight: "Testimonials".into(),
        subtitle: "Don't just take our word for it - hear what our clients have to say about working with us".into(),
        items: vec![
            testimonial(
                1,
                "Col. Rajesh Kumar",
                "Project Director",
                "Indian Army",
                "Zenture IT Solutions delivered a robust and secure communication system that exceeded our expectations.",
            ),
            testimonial(
                2,
                "Dr. Priya Sharma",
                "Chief Technology Officer",
                "Indian Forest Department",
                "The wildlife tracking system has revolutionized our forest management. The team's expertise is outstanding.",
            ),
            testimonial(
                3,
                "Michael Chen",
                "Digital Operations Manager",
                "Guinness World Records",
                "Working with Zenture was a pleasure. They streamlined our verification process.",
            ),
        ],
        stats: vec![
            stat("200+", "Happy Clients"),
            stat("98%", "Satisfaction Rate"),
            stat("150+", "Projects Delivered"),
            stat("24/7", "Support Available"),
        ],
    }
}

pub fn default_contact() -> ContactContent {
    ContactContent {
        title_prefix: "Get in".into(),
        title_highlight: "Touch".into(),
        subtitle: "Ready to start your next project? Let's discuss how we can help you achieve your goals".into(),
        info_title: "Contact Information".into(),
        info_description: "We're here to answer your questions and discuss your project requirements.".into(),
        response_title: "Quick Response Time".into(),
        response_text: "We typically respond to inquiries within 24 hours".into(),
        items: vec![
            ContactInfoItem {
                kind: ContactKind::Email,
                title: "Email".into(),
                content: "info@zenture.in".into(),
                link: Some("mailto:info@zenture.in".into()),
            },
            ContactInfoItem {
                kind: ContactKind::Phone,
                title: "Phone".into(),
                content: "+91 7715861605".into(),
                link: Some("tel:+917715861605".into()),
            },
            ContactInfoItem {
                kind: ContactKind::Location,
                title: "Location".into(),
                content: "NIBM, Pune - MH, India".into(),
                link: None,
            },
        ],
    }
}

pub fn default_footer() -> FooterContent {
    FooterContent {
        description: "Transforming ideas into innovative digital solutions. We specialize in web development, mobile apps, IoT, and AI-powered applications.".into(),
        quick_links: strings(&[
            "Home",
            "About",
            "Services",
            "Tech Stack",
            "Portfolio",
            "Clients",
            "Research",
            "Blog",
            "Careers",
            "Contact",
        ]),
        services: strings(&[
            "Web Development",
            "Software Development",
            "Mobile Apps",
            "IoT Solutions",
            "AI Solutions",
            "IT Consultation",
        ]),
        social_links: [
            SocialPlatform::Github,
            SocialPlatform::Linkedin,
            SocialPlatform::Twitter,
            SocialPlatform::Mail,
        ]
        .into_iter()
        .map(|platform| SocialLink {
            platform,
            link: "#".into(),
        })
        .collect(),
        legal_links: ["Privacy Policy", "Terms of Service", "Cookie Policy"]
            .into_iter()
            .map(|label| LegalLink {
                label: label.into(),
                href: "#".into(),
            })
            .collect(),
    }
}

pub fn default_trusted_by() -> TrustedByContent {
    TrustedByContent {
        eyebrow: "Our Clientele".into(),
        title_prefix: "Trusted by".into(),
        title_highlight: "Industry Leaders".into(),
        subtitle: "Partnerships built on delivery, reliability, and measurable impact across defense, education, logistics, and industrial sectors.".into(),
        badge_text: "Active collaborations across 5+ industry verticals".into(),
    }
}

/// The complete default content table.
pub fn default_site_content() -> SiteContent {
    SiteContent {
        navbar_links: default_navbar_links(),
        about: default_about(),
        services: default_services(),
        iot: default_iot(),
        portfolio: default_portfolio(),
        blog: default_blog(),
        research: default_research(),
        testimonials: default_testimonials(),
        contact: default_contact(),
        footer: default_footer(),
        trusted_by: default_trusted_by(),
    }
}

/// Hero copy shown until (or instead of) the CMS `hero` document.
pub fn default_hero() -> HeroContent {
    HeroContent {
        badge_text: "Innovative IT Solutions".into(),
        title_line1: "Transform Your Ideas Into".into(),
        title_highlight: "Digital Reality".into(),
        description: "Zenture IT Solutions delivers cutting-edge software development services, from web and mobile applications to AI-powered solutions and IoT innovations.".into(),
        primary_button_text: "Get Started".into(),
        primary_button_link: "#contact".into(),
        secondary_button_text: "Our Services".into(),
        secondary_button_link: "#services".into(),
    }
}
