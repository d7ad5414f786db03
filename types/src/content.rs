//! Page content.
//!
//! Everything the page shows is hardcoded here as static data; rendering
//! only decides how to lay it out.

/// A degree with its coursework badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub coursework: &'static [&'static str],
}

/// A role with its highlight bullets and technology badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
    pub stack: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: &'static str,
    pub highlights: &'static [&'static str],
    pub stack: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

/// Outbound contact points. Rendered as styled text; the surrounding
/// environment owns actually opening them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub motto: &'static str,
    pub about: &'static [&'static str],
    pub education: &'static [EducationEntry],
    pub experience: &'static [ExperienceEntry],
    pub projects: &'static [ProjectEntry],
    pub skills: &'static [SkillGroup],
    pub contact: ContactInfo,
}

impl Profile {
    /// The portfolio as published.
    #[must_use]
    pub const fn standard() -> &'static Self {
        &PROFILE
    }
}

static PROFILE: Profile = Profile {
    name: "Astha Soni",
    tagline: "Data Scientist | Data Analyst | AI&ML Engineer",
    motto: "Where Data Science Meets Creativity and Purpose",
    about: &[
        "Hi there! I'm a Data Science graduate student at Stony Brook University with a \
         background in Information and Communication Technology. I specialize in data \
         analytics, machine learning, and building end-to-end data solutions. From \
         financial modeling to e-commerce systems and explainable AI, I love transforming \
         complex data into meaningful insights. Passionate about solving real-world \
         problems, I work with tools like Python, SQL, Power BI, and cloud platforms such \
         as AWS and Databricks.",
        "My expertise spans across various domains including reinforcement learning, \
         statistical computing, and data engineering. I'm particularly interested in \
         developing AI solutions that solve real-world problems and provide actionable \
         insights.",
    ],
    education: &[
        EducationEntry {
            degree: "Master of Science in Data Science",
            school: "Stony Brook University, Stony Brook, NY",
            period: "2024 - 2026",
            summary: "Pursuing advanced studies in data science with a focus on \
                      statistical methods and machine learning.",
            coursework: &[
                "Intro to Probability",
                "Data Analysis",
                "Reinforcement Learning",
                "Statistical Computing",
            ],
        },
        EducationEntry {
            degree: "Bachelor of Technology in Information and Communication Technology",
            school: "Pandit Deendayal Energy University, India",
            period: "2020 - 2024",
            summary: "Completed undergraduate studies with a focus on computer science \
                      and data technologies.",
            coursework: &[
                "Discrete Mathematics Structures",
                "Applied Machine Learning",
                "Data Structure and Algorithms",
            ],
        },
    ],
    experience: &[
        ExperienceEntry {
            role: "Data Analyst Intern",
            company: "JustDogs",
            period: "December 2023 - May 2024",
            highlights: &[
                "Conducted data analytics with Market Basket Analysis and Cohort \
                 Analysis using Python, leading to 13% increase in sales while utilizing \
                 Microsoft Power BI for data visualizations and Excel for initial data \
                 exploration.",
                "Automated the data pipeline for reading raw data from an AWS S3 bucket, \
                 transformed it with business logic using Apache Spark, and saved the \
                 data in Databricks tables for streamlining data workflows for efficient \
                 analysis.",
                "Built a rule-based chatbot, leveraging Google Dialogflow for NLP, \
                 PyCharm and FastAPI for backend processing, and MySQL for data \
                 management which led to a 20% increase in customer engagement and \
                 enhanced website traffic.",
            ],
            stack: &[
                "Python",
                "Power BI",
                "AWS",
                "Apache Spark",
                "Databricks",
                "Dialogflow",
                "FastAPI",
                "MySQL",
            ],
        },
        ExperienceEntry {
            role: "Junior Summer Intern",
            company: "S&P Global",
            period: "July 2023 - August 2023",
            highlights: &[
                "Worked on financial analysis and rating recommendation of Tesla's \
                 financial model, producing insights on 51.4% growth in 2022, and a 6.7% \
                 net profit margin, contributing to a winning presentation in a \
                 competitive setting.",
                "Created a knowledge-based AI for Minesweeper, which strategically made \
                 decisions and drew inferences. Additionally, acquired sessions on Deep \
                 Learning, Computer Vision, machine learning and Lean & Agile principles.",
            ],
            stack: &[
                "Financial Analysis",
                "AI",
                "Deep Learning",
                "Computer Vision",
                "Machine Learning",
                "Agile",
            ],
        },
        ExperienceEntry {
            role: "Data Engineer Intern",
            company: "Brainy Beams Technologies",
            period: "May 2023 - July 2023",
            highlights: &[
                "Developed the backend of a client-focused e-commerce website using \
                 Django, implementing robust features such as product catalog, \
                 authentication, cart, and secure payment processing, serving over \
                 10,000 active users.",
                "Leveraged Django's Model View Template architecture and incorporated \
                 agile methodologies and utilized big data technology such as Hadoop, to \
                 enhance data processing capabilities, system performance and \
                 scalability.",
            ],
            stack: &[
                "Django",
                "Backend Development",
                "Agile",
                "Hadoop",
                "Big Data",
            ],
        },
    ],
    projects: &[
        ProjectEntry {
            name: "Traffic Signal Control System",
            highlights: &[
                "Engineered deep RL algorithms for signal control system with a custom \
                 OpenAI Gym environment to simulate an arbitrary road network, \
                 integrated with SUMO (Simulation of Urban MObility) to model realistic \
                 traffic flow.",
                "Implemented Q-Learning, SARSA and Deep Q-Network (DQN) algorithms to \
                 optimize waiting times, with DQN achieving a 91% improvement in traffic \
                 efficiency and reducing congestion through reward-based training.",
            ],
            stack: &[
                "Reinforcement Learning",
                "OpenAI Gym",
                "Q-Learning",
                "SARSA",
                "DQN",
                "SUMO",
            ],
        },
        ProjectEntry {
            name: "eXplainable Artificial Intelligence for Disease Prediction",
            highlights: &[
                "Performed a comparative analysis of XAI using Python for disease \
                 prediction across 12 research papers, evaluating different supervised \
                 machine learning models including SVM, Logistic Regression, and KNN.",
                "SVM demonstrated superior performance (>90% accuracy) for early \
                 diagnosis, while XAI frameworks, like SHAP, LIME, and DALEX enhanced \
                 the interpretability and clinical relevance of AI in healthcare.",
            ],
            stack: &[
                "XAI",
                "Python",
                "SVM",
                "Logistic Regression",
                "KNN",
                "SHAP",
                "LIME",
                "DALEX",
            ],
        },
        ProjectEntry {
            name: "Credit Card Fraud Detection",
            highlights: &[
                "Applied six machine learning models such as Logistic Regression, SVM, \
                 KNN, Decision Tree, Light GBM, and XGBoost on PCA-transformed data from \
                 over 28,000 users, using TensorFlow and scikit-learn.",
                "Evaluated precision, recall, and F1 score across all predictive models, \
                 with LightGBM achieving the highest accuracy of 95%. Additionally, SHAP \
                 analysis was performed to ensure robust model performance and provide \
                 valuable insights.",
            ],
            stack: &[
                "Machine Learning",
                "TensorFlow",
                "scikit-learn",
                "LightGBM",
                "XGBoost",
                "PCA",
                "SHAP",
            ],
        },
    ],
    skills: &[
        SkillGroup {
            name: "Programming Languages",
            items: &["Python", "R", "SQL", "C", "C++", "Java", "MATLAB"],
        },
        SkillGroup {
            name: "Tools & Frameworks",
            items: &["Tableau", "PowerBI", "Django", "Pycharm", "Git", "Dialogflow"],
        },
        SkillGroup {
            name: "Data Science",
            items: &[
                "Data Analysis",
                "LLM",
                "EDA Pipeline",
                "Forecasting",
                "ML",
                "NLP",
                "Gen AI",
            ],
        },
        SkillGroup {
            name: "Libraries",
            items: &[
                "Pandas",
                "NumPy",
                "TensorFlow",
                "Scikit-Learn",
                "Matplotlib",
                "PyTorch",
                "Seaborn",
            ],
        },
        SkillGroup {
            name: "Databases & Cloud",
            items: &["MySQL", "PostgreSQL", "MongoDB", "AWS", "DataBricks", "Hadoop"],
        },
        SkillGroup {
            name: "Quantitative & Office",
            items: &[
                "Probability",
                "Statistical Modeling",
                "Hypothesis Testing",
                "Regression",
                "Excel",
                "PowerPoint",
            ],
        },
    ],
    contact: ContactInfo {
        email: "asthasoni161@gmail.com",
        github: "github.com/asthasoni22",
        linkedin: "linkedin.com/in/astha-soni-9649a9244",
        resume: "/resume.pdf",
    },
};
