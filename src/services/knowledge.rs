// src/services/knowledge.rs
//! Static knowledge base behind the site chat widget.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QaEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A named group of trigger keywords and candidate replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseCategory {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
    pub responses: &'static [&'static str],
}

pub const DEFAULT_CATEGORY: &str = "default";

/// Last resort when the default category has nothing to offer.
pub const FALLBACK_REPLY: &str = "I'm here to help! Feel free to ask me about our services, the technologies we use, or how our team is structured.";

const fn qa(question: &'static str, answer: &'static str) -> QaEntry {
    QaEntry { question, answer }
}

pub static QA_CORPUS: &[QaEntry] = &[
    qa(
        "What services do you offer?",
        "We offer custom software development, web and mobile applications, cloud architecture, data engineering, and ongoing product support.",
    ),
    qa(
        "What does your company do?",
        "We are a technology consultancy that designs, builds and maintains digital products for startups and established businesses.",
    ),
    qa(
        "Do you build websites?",
        "Yes. We build marketing sites, web applications and e-commerce platforms, from design through to deployment.",
    ),
    qa(
        "Do you build mobile apps?",
        "Yes. We deliver native iOS and Android apps as well as cross-platform apps built with React Native and Flutter.",
    ),
    qa(
        "What technologies do you use?",
        "Our core stack includes TypeScript, React, Next.js, Node.js, Python, Go and Rust, deployed on AWS, Google Cloud or Azure.",
    ),
    qa(
        "Do you work with React?",
        "React and Next.js are our default choice for web front ends, and we have shipped dozens of production apps with them.",
    ),
    qa(
        "Do you use Rust?",
        "We use Rust for performance-critical services, data pipelines and tooling where safety and speed matter.",
    ),
    qa(
        "Which cloud providers do you support?",
        "We are certified on AWS, Google Cloud and Microsoft Azure and can also work with your existing hosting provider.",
    ),
    qa(
        "Do you offer DevOps services?",
        "Yes. We set up CI/CD pipelines, infrastructure as code, container orchestration and monitoring for our clients.",
    ),
    qa(
        "Do you do AI or machine learning?",
        "We build machine learning features such as recommendation systems, document processing and LLM-powered assistants.",
    ),
    qa(
        "How is your team structured?",
        "Each project gets a dedicated cross-functional squad: a product manager, a tech lead, engineers, a designer and QA.",
    ),
    qa(
        "How big is your team?",
        "We are a team of around 60 engineers, designers and product specialists working across three time zones.",
    ),
    qa(
        "Where are you located?",
        "Our headquarters are in London, with delivery teams in Lisbon and Toronto. We work with clients worldwide.",
    ),
    qa(
        "Do you work remotely?",
        "Yes. We are remote-friendly and collaborate with clients through regular video calls, shared boards and chat.",
    ),
    qa(
        "How much does a project cost?",
        "Costs depend on scope. Small projects typically start around $10,000, and we provide a detailed estimate after a discovery call.",
    ),
    qa(
        "What is your pricing model?",
        "We offer fixed-price engagements for well-defined scopes and time-and-materials or dedicated team models for evolving products.",
    ),
    qa(
        "How long does a project take?",
        "A typical MVP takes 8 to 12 weeks. Larger platforms are delivered incrementally in two-week sprints.",
    ),
    qa(
        "What is your development process?",
        "We follow an agile process: discovery, design, iterative development in sprints, continuous testing and a managed launch.",
    ),
    qa(
        "Do you provide support after launch?",
        "Yes. We offer maintenance plans covering monitoring, security updates, bug fixes and feature enhancements.",
    ),
    qa(
        "Do you sign an NDA?",
        "Of course. We are happy to sign a non-disclosure agreement before discussing the details of your project.",
    ),
    qa(
        "Who owns the code?",
        "You do. All intellectual property and source code are transferred to you once the work is paid for.",
    ),
    qa(
        "What industries do you work with?",
        "We have experience in fintech, healthcare, e-commerce, logistics, education and media.",
    ),
    qa(
        "Can I see your portfolio?",
        "Absolutely. Visit the Projects page to browse case studies of our recent work.",
    ),
    qa(
        "Do you have case studies?",
        "Yes. Our Projects and Insights pages include detailed case studies with outcomes and the technologies used.",
    ),
    qa(
        "How do I contact you?",
        "Use the form on our Contact page or email us at contact@example.com. We reply within one business day.",
    ),
    qa(
        "How do I start a project?",
        "Reach out through the Contact page. We will schedule a free discovery call to understand your goals.",
    ),
    qa(
        "Are you hiring?",
        "We are always looking for talented people. Check the About page for current openings.",
    ),
    qa(
        "Do you do UI/UX design?",
        "Yes. Our design team handles user research, wireframes, prototypes and polished visual design.",
    ),
    qa(
        "Do you work with startups?",
        "Yes. We help startups validate ideas quickly with lean MVPs and scale them as they grow.",
    ),
    qa(
        "Do you write a blog?",
        "We publish articles on engineering and product topics on our Blog and Insights pages.",
    ),
];

pub static RESPONSE_CATEGORIES: &[ResponseCategory] = &[
    ResponseCategory {
        name: "greeting",
        patterns: &["hello", "hi", "hey", "good morning", "good afternoon", "good evening", "greetings"],
        responses: &[
            "Hello! How can I help you today?",
            "Hi there! What would you like to know about our services?",
            "Hey! Ask me anything about our work, technologies or team.",
        ],
    },
    ResponseCategory {
        name: "thanks",
        patterns: &["thank", "thanks", "appreciate", "cheers"],
        responses: &[
            "You're welcome! Is there anything else I can help with?",
            "Happy to help! Let me know if you have any other questions.",
            "Anytime! Feel free to ask if anything else comes up.",
        ],
    },
    ResponseCategory {
        name: "goodbye",
        patterns: &["bye", "goodbye", "see you", "farewell"],
        responses: &[
            "Goodbye! Thanks for visiting.",
            "See you soon! Don't hesitate to reach out through our Contact page.",
        ],
    },
    ResponseCategory {
        name: "help",
        patterns: &["help", "assist", "support me"],
        responses: &[
            "I can answer questions about our services, technologies, pricing, process and team. What would you like to know?",
            "Sure! Try asking about what we build, the tech stack we use, or how to start a project.",
        ],
    },
    ResponseCategory {
        name: DEFAULT_CATEGORY,
        patterns: &[],
        responses: &[
            "I'm not sure I understood that. Could you rephrase? You can ask about our services, technologies or team.",
            "Good question! I don't have an answer for that yet. Try asking about our services or get in touch via the Contact page.",
            "I didn't quite catch that. I can tell you about our services, the technologies we use, or how our team works.",
        ],
    },
];
