//! Built-in catalog used when the site has no catalog file

use super::{Catalog, IconRef, PostEntry, ProjectEntry, SkillGroupEntry, SocialLinkEntry};

fn social(
    id: &str,
    target_url: &str,
    icon: IconRef,
    hover_background: &str,
    icon_color: &str,
    hover_icon_color: &str,
    label: &str,
) -> SocialLinkEntry {
    SocialLinkEntry {
        id: id.to_string(),
        target_url: target_url.to_string(),
        icon,
        hover_background: hover_background.to_string(),
        icon_color: icon_color.to_string(),
        hover_icon_color: hover_icon_color.to_string(),
        label: label.to_string(),
    }
}

fn project(target_url: &str, image: &str, title: &str, description: &str) -> ProjectEntry {
    ProjectEntry {
        target_url: target_url.to_string(),
        image: image.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        featured: None,
    }
}

fn post(title: &str, date: &str, content: &str) -> PostEntry {
    PostEntry {
        target_url: "#".to_string(),
        title: title.to_string(),
        date: date.to_string(),
        content: Some(content.to_string()),
    }
}

fn skills(title: &str, icon: IconRef, skills: &[&str]) -> SkillGroupEntry {
    SkillGroupEntry {
        title: title.to_string(),
        icon,
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn builtin() -> Catalog {
    let social_links = vec![
        social(
            "github",
            "https://github.com/pagimos",
            IconRef::Github,
            "#f9fafb",
            "#f0f0f0",
            "#000000",
            "Github",
        ),
        social(
            "linkedin",
            "https://www.linkedin.com/in/pagimos/",
            IconRef::Linkedin,
            "#0077b5",
            "#0077b5",
            "#ffffff",
            "LinkedIn",
        ),
        social(
            "instagram",
            "https://www.instagram.com/pagimos/",
            IconRef::Instagram,
            "linear-gradient(to right, #fd5949, #d6249f)",
            "#d6249f",
            "#ffffff",
            "Instagram",
        ),
        social(
            "twitter",
            "https://twitter.com/pagimos",
            IconRef::Twitter,
            "#00acee",
            "#00acee",
            "#ffffff",
            "Twitter",
        ),
    ];

    let projects = vec![
        project(
            "https://estifham.vercel.app/",
            "/wlogo.svg",
            "Estifham",
            "Challenge friends with fun question battles online.",
        ),
        project(
            "https://prodevworld.com",
            "/prodevworld.png",
            "Pro Dev World",
            "Turning client ideas into powerful digital projects.",
        ),
        project(
            "https://bratva.website",
            "/bratva.png",
            "Bratva Community",
            "Join Bratva RP : history, members, heists, and market.",
        ),
        project(
            "https://www.stockivia.com",
            "/STOCKIVIA.png",
            "Stockivia",
            "Inventory and sales management system for businesses.",
        ),
        project(
            "https://gyminium.com",
            "/gyminium.png",
            "Gyminium",
            "Desktop app designed to simplify and manage your gym.",
        ),
        project(
            "https://www.intelculator.com",
            "/intelculator.png",
            "Intelculator",
            "IQ calculator with interactive intelligence tests.",
        ),
        project(
            "https://www.instagram.com/digital.bitwave",
            "/dbitwave.png",
            "Digital Bitwave",
            "Helping brands grow with Instagram and Facebook ads.",
        ),
    ];

    let posts = vec![
        post(
            "The Rise of AI-Powered Developer Tools: Boosting Productivity",
            "15-05-2024",
            "AI coding assistants are revolutionizing software development. These tools leverage \
             machine learning to suggest code completions, debug issues, and even generate entire \
             functions based on natural language descriptions...",
        ),
        post(
            "Web3 Development: Building the Decentralized Future",
            "03-05-2024",
            "As Web3 technologies gain mainstream attention, developers are exploring new \
             frameworks for creating decentralized applications. The integration of blockchain, \
             smart contracts, and tokenomics is creating new possibilities...",
        ),
        post(
            "The Evolution of Frontend Frameworks in 2024",
            "22-04-2024",
            "Modern frontend development continues to evolve with frameworks like React, Vue, and \
             Svelte introducing more efficient rendering strategies. Server components and partial \
             hydration techniques are changing how we think about web performance...",
        ),
        post(
            "Implementing Microservices Architecture: Lessons Learned",
            "11-04-2024",
            "Breaking down monolithic applications into microservices offers scalability and \
             maintainability advantages, but comes with its own challenges. Effective service \
             discovery, API gateways, and containerization strategies are essential...",
        ),
        post(
            "DevOps Automation: From CI/CD to GitOps",
            "03-04-2024",
            "Modern DevOps practices are becoming increasingly automated. GitOps extends CI/CD \
             principles by using Git as the single source of truth for infrastructure \
             declarations, enabling more consistent deployments and easier rollbacks...",
        ),
    ];

    let skills = vec![
        skills(
            "Frontend",
            IconRef::Code,
            &["React", "Next.js", "Tailwind CSS", "JavaScript", "TypeScript", "HTML/CSS"],
        ),
        skills(
            "Backend",
            IconRef::Layers,
            &["Node.js", "Express", "Python", "Django", "REST API", "GraphQL"],
        ),
        skills(
            "Database",
            IconRef::Database,
            &["MongoDB", "MySQL", "PostgreSQL", "Firebase", "Redis", "Supabase"],
        ),
        skills(
            "Mobile & Other",
            IconRef::Smartphone,
            &["React Native", "Git", "Docker", "AWS", "UX/UI Design"],
        ),
    ];

    Catalog {
        social_links,
        projects,
        posts,
        skills,
    }
}
