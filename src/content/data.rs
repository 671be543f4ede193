//! Built-in site content

use super::model::{
    AboutContent, Author, Category, Comment, ContactInfo, CoreValue, FeaturedPost, HomeContent,
    Post, PostSummary, RelatedPost, Reply, SiteContent, TeamMember, TimelineEntry,
};

const AI_POST_BODY: &str = r#"## Introduction {#introduction}

Artificial Intelligence (AI) is rapidly transforming various industries, and web development is no exception. As we move towards more intelligent and adaptive websites, AI is playing a crucial role in shaping the future of how we build and interact with web applications.

## The Impact of AI on Personalization {#personalization}

One of the most significant impacts of AI in web development is in the area of personalization. AI algorithms can analyze user behavior, preferences, and interactions to create highly tailored experiences. This level of customization goes beyond simple A/B testing, allowing websites to dynamically adjust their content, layout, and functionality based on individual user needs.

## AI-Powered Chatbots and Virtual Assistants {#chatbots}

Another exciting application of AI is in the realm of chatbots and virtual assistants. These AI-powered tools are becoming increasingly sophisticated, capable of handling complex queries and providing human-like interactions. As natural language processing continues to improve, we can expect to see chatbots that are nearly indistinguishable from human customer service representatives.

## Revolutionizing Web Design with AI {#web-design}

AI is also revolutionizing the way we approach web design. Generative AI tools can now create entire layouts, color schemes, and even write copy based on a few input parameters. While these tools won't replace human designers, they can significantly speed up the design process and provide inspiration for unique layouts.

## Code Example: Implementing an AI Chatbot {#code-example}

```js
import { useState } from 'react';
import { OpenAI } from 'openai';

const AIChatbot = () => {
  const [input, setInput] = useState('');
  const [response, setResponse] = useState('');

  const handleSubmit = async (e) => {
    e.preventDefault();
    const openai = new OpenAI({ apiKey: 'your-api-key' });
    const completion = await openai.chat.completions.create({
      messages: [{ role: 'user', content: input }],
      model: 'gpt-3.5-turbo',
    });
    setResponse(completion.choices[0].message.content);
  };

  return (
    <div>
      <form onSubmit={handleSubmit}>
        <input
          value={input}
          onChange={(e) => setInput(e.target.value)}
          placeholder="Ask me anything..."
        />
        <button type="submit">Send</button>
      </form>
      {response && <p>{response}</p>}
    </div>
  );
};

export default AIChatbot;
```

## Conclusion {#conclusion}

The future of web development is intrinsically linked with the advancements in AI. As these technologies continue to evolve, we can expect to see websites that are more intelligent, adaptive, and user-centric than ever before. The key for web developers will be to stay ahead of the curve, continually learning and adapting to these new AI-driven paradigms.
"#;

fn s(value: &str) -> String {
    value.to_string()
}

fn home() -> HomeContent {
    let card_image = "/placeholder.svg?height=400&width=600";
    let recent = [
        ("10 Essential VS Code Extensions for Productivity", "Tools"),
        ("Understanding the JAMstack Architecture", "Web Development"),
        ("The Rise of Headless CMS in Modern Web Design", "CMS"),
        ("Mastering CSS Grid: Advanced Layout Techniques", "CSS"),
        ("Optimizing React Applications for Performance", "React"),
        ("Introduction to Web Accessibility (A11y)", "Accessibility"),
    ]
    .into_iter()
    .map(|(title, category)| PostSummary {
        title: s(title),
        image: s(card_image),
        category: s(category),
    })
    .collect();

    let categories = [
        ("Technology", "💻"),
        ("Design", "🎨"),
        ("Development", "⚙️"),
        ("Career", "💼"),
    ]
    .into_iter()
    .map(|(name, icon)| Category {
        name: s(name),
        icon: s(icon),
    })
    .collect();

    HomeContent {
        featured: FeaturedPost {
            slug: s("featured-post"),
            title: s("The Future of Web Development: Trends to Watch in 2024"),
            excerpt: s("Explore the cutting-edge technologies and methodologies that are shaping the future of web development. From AI-driven design to WebAssembly, discover what's next in our ever-evolving digital landscape."),
            image: s("/placeholder.svg?height=600&width=1200"),
            author: s("Alex Johnson"),
            date: s("May 15, 2024"),
            category: s("Technology"),
        },
        recent,
        categories,
    }
}

fn about() -> AboutContent {
    let team_image = "/placeholder.svg?height=300&width=300";
    let team = [
        ("Jane Doe", "Founder & Editor-in-Chief"),
        ("John Smith", "Senior Tech Writer"),
        ("Emily Johnson", "UX/UI Specialist"),
        ("Michael Brown", "Data Science Contributor"),
    ]
    .into_iter()
    .map(|(name, role)| TeamMember {
        name: s(name),
        role: s(role),
        image: s(team_image),
    })
    .collect();

    let timeline = [
        (2020, "TechBlog founded"),
        (2021, "Reached 100,000 monthly readers"),
        (2022, "Launched podcast series"),
        (2023, "Opened community forum"),
        (2024, "Celebrating 4 years of tech insights"),
    ]
    .into_iter()
    .map(|(year, event)| TimelineEntry {
        year,
        event: s(event),
    })
    .collect();

    let values = [
        ("Innovation", "Staying at the forefront of technological advancements and sharing cutting-edge insights."),
        ("Accessibility", "Breaking down complex topics into understandable content for tech enthusiasts of all levels."),
        ("Community", "Fostering a vibrant community of learners, creators, and innovators in the tech space."),
    ]
    .into_iter()
    .map(|(title, description)| CoreValue {
        title: s(title),
        description: s(description),
    })
    .collect();

    AboutContent {
        hero_image: s("/placeholder.svg?height=1080&width=1920"),
        intro: s("Empowering the tech community with cutting-edge insights and knowledge since 2020."),
        mission: s("At TechBlog, we're passionate about demystifying technology and making it accessible to everyone. Our goal is to inspire, educate, and empower our readers to embrace the digital future."),
        values,
        timeline,
        team,
    }
}

fn ai_post() -> Post {
    let avatar = "/placeholder.svg?height=50&width=50";

    Post {
        slug: s("future-of-ai-in-web-development"),
        title: s("The Future of Artificial Intelligence in Web Development"),
        excerpt: s("How AI is reshaping personalization, chatbots and the way we design for the web."),
        image: s("/placeholder.svg?height=600&width=1200"),
        author: Author {
            name: s("Jane Doe"),
            avatar: s("/placeholder.svg?height=100&width=100"),
            bio: s("Tech enthusiast and AI specialist with over 10 years of experience in the industry."),
        },
        date: s("May 15, 2024"),
        reading_time: Some(s("8 min read")),
        category: s("Technology"),
        tags: vec![
            s("Artificial Intelligence"),
            s("Web Development"),
            s("Future Tech"),
        ],
        body: s(AI_POST_BODY),
        toc_labels: [
            ("personalization", "AI and Personalization"),
            ("chatbots", "AI-Powered Chatbots"),
            ("web-design", "AI in Web Design"),
            ("code-example", "Code Example"),
        ]
        .into_iter()
        .map(|(id, label)| (s(id), s(label)))
        .collect(),
        related: vec![
            RelatedPost {
                title: s("10 AI Tools Every Web Developer Should Know"),
                slug: s("ai-tools-for-developers"),
            },
            RelatedPost {
                title: s("The Rise of AI-Generated Content in Web Design"),
                slug: s("ai-generated-content"),
            },
            RelatedPost {
                title: s("How Machine Learning is Changing UX Design"),
                slug: s("machine-learning-ux-design"),
            },
        ],
        comments: vec![
            Comment {
                id: 1,
                author: s("John Smith"),
                avatar: s(avatar),
                content: s("Great article! I'm excited to see how AI will continue to shape the web development landscape."),
                date: s("May 16, 2024"),
                replies: vec![Reply {
                    id: 2,
                    author: s("Jane Doe"),
                    avatar: s(avatar),
                    content: s("Thanks, John! I agree, the potential is truly exciting."),
                    date: s("May 16, 2024"),
                }],
            },
            Comment {
                id: 3,
                author: s("Alice Johnson"),
                avatar: s(avatar),
                content: s("I'd love to see more concrete examples of how AI is being used in web development today. Any specific case studies you can share?"),
                date: s("May 17, 2024"),
                replies: Vec::new(),
            },
        ],
    }
}

fn contact() -> ContactInfo {
    ContactInfo {
        address: s("123 Tech Street, San Francisco, CA 94105"),
        phone: s("+1 (555) 123-4567"),
        email: s("contact@techblog.com"),
        map_image: s("/placeholder.svg?height=300&width=500"),
    }
}

/// The literal content the site ships with
pub fn builtin() -> SiteContent {
    SiteContent {
        home: home(),
        about: about(),
        posts: vec![ai_post()],
        contact: contact(),
    }
}
