//! Canned PROJ-BLE answers used by the local responder.
//!
//! Entries are matched by lower-cased substring search in table order, so
//! the order of [`KNOWLEDGE_BASE`] is part of the behaviour: a message that
//! mentions both "mission" and "careers" gets the mission answer.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Mission,
    Vision,
    Values,
    Careers,
    BlendedLearning,
    Education,
    Technology,
    Students,
    Teachers,
    Future,
    Greeting,
    Thanks,
    Help,
}

#[derive(Debug)]
pub struct KnowledgeEntry {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

impl KnowledgeEntry {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

pub const KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        topic: Topic::Mission,
        keywords: &["mission"],
        answer: "PROJ-BLE's mission is to revolutionize education through innovative blended learning experiences that combine the best of traditional and digital education methods.",
    },
    KnowledgeEntry {
        topic: Topic::Vision,
        keywords: &["vision"],
        answer: "To become the leading educational technology company that empowers learners worldwide with personalized, engaging, and effective learning experiences.",
    },
    KnowledgeEntry {
        topic: Topic::Values,
        keywords: &["value", "core"],
        answer: "Our core values include Innovation, Accessibility, Excellence, Collaboration, and Student-Centered Learning. We believe in making quality education accessible to everyone.",
    },
    KnowledgeEntry {
        topic: Topic::Careers,
        keywords: &["career", "job", "work"],
        answer: "Working with PROJ-BLE offers opportunities to impact education globally, work with cutting-edge technology, collaborate with passionate educators, and grow in a supportive environment focused on learning and development.",
    },
    KnowledgeEntry {
        topic: Topic::BlendedLearning,
        keywords: &["blend", "learning"],
        answer: "Blended learning combines face-to-face instruction with online learning components, creating a more flexible, personalized, and effective educational experience.",
    },
    KnowledgeEntry {
        topic: Topic::Education,
        keywords: &["education", "teach"],
        answer: "Education is the foundation of progress. At PROJ-BLE, we focus on creating engaging, interactive learning experiences that adapt to individual student needs.",
    },
    KnowledgeEntry {
        topic: Topic::Technology,
        keywords: &["technology", "tech"],
        answer: "We leverage the latest educational technology including AI, adaptive learning systems, virtual reality, and data analytics to enhance the learning experience.",
    },
    KnowledgeEntry {
        topic: Topic::Students,
        keywords: &["student"],
        answer: "Students are at the center of everything we do. We design our programs to meet diverse learning styles, provide personalized feedback, and support student success.",
    },
    // "teach" above already claims anything containing "teacher".
    KnowledgeEntry {
        topic: Topic::Teachers,
        keywords: &["teacher", "instructor"],
        answer: "We support educators with professional development, innovative teaching tools, and resources that help them create more effective and engaging classrooms.",
    },
    KnowledgeEntry {
        topic: Topic::Future,
        keywords: &["future"],
        answer: "The future of education is personalized, technology-enhanced, and globally accessible. PROJ-BLE is leading this transformation.",
    },
    KnowledgeEntry {
        topic: Topic::Greeting,
        keywords: &["hello", "hi", "hey"],
        answer: "Hello! Welcome to PROJ-BLE. I'm here to help you learn more about our educational initiatives. How can I assist you today?",
    },
    KnowledgeEntry {
        topic: Topic::Thanks,
        keywords: &["thank", "thanks"],
        answer: "You're welcome! I'm always here to help with any questions about PROJ-BLE or education in general.",
    },
    KnowledgeEntry {
        topic: Topic::Help,
        keywords: &["help"],
        answer: "I can help you with information about PROJ-BLE including our mission, values, career opportunities, and educational approaches. You can also ask about blended learning, educational technology, and more!",
    },
];

pub const WELCOME_MESSAGE: &str = "Hello! I'm the **PROJ-BLE** assistant. Ask me about our mission, vision, values, careers, or blended learning.";

/// First entry whose keywords occur in the message, if any.
pub fn classify(message: &str) -> Option<&'static KnowledgeEntry> {
    let lowered = message.to_lowercase();
    KNOWLEDGE_BASE.iter().find(|entry| entry.matches(&lowered))
}

pub fn fallback_reply(message: &str) -> String {
    format!(
        "That's a great question about \"{message}\"! While I have specific knowledge about PROJ-BLE's mission, values, and educational approach, I'd recommend exploring our full knowledge base or contacting us directly for more detailed information on this topic. Is there anything specific about PROJ-BLE I can help you with?"
    )
}

/// Canned answer for the message, or the echoing fallback.
pub fn answer_for(message: &str) -> String {
    match classify(message) {
        Some(entry) => entry.answer.to_string(),
        None => fallback_reply(message),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub question: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Mission",
        question: "What is PROJ-BLE's mission?",
    },
    QuickAction {
        label: "Vision",
        question: "What is PROJ-BLE's vision?",
    },
    QuickAction {
        label: "Core Values",
        question: "What are PROJ-BLE's core values?",
    },
    QuickAction {
        label: "Careers",
        question: "Why should I work with PROJ-BLE?",
    },
    QuickAction {
        label: "Blended Learning",
        question: "What is blended learning?",
    },
    QuickAction {
        label: "Technology",
        question: "What technology does PROJ-BLE use?",
    },
];
