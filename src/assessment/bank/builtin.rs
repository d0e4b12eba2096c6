//! Built-in question corpus.

use crate::assessment::question::{AnswerOption, Category, Question};
use std::borrow::Cow;

macro_rules! answer {
    ($text:literal, $tech:literal, $adapt:literal, $feedback:literal) => {
        AnswerOption {
            text: Cow::Borrowed($text),
            tech_score: $tech,
            adapt_score: $adapt,
            ethics_score: None,
            feedback: Cow::Borrowed($feedback),
        }
    };
    ($text:literal, $tech:literal, $adapt:literal, $ethics:literal, $feedback:literal) => {
        AnswerOption {
            text: Cow::Borrowed($text),
            tech_score: $tech,
            adapt_score: $adapt,
            ethics_score: Some($ethics),
            feedback: Cow::Borrowed($feedback),
        }
    };
}

macro_rules! question {
    ($id:literal, $category:ident, $text:literal, [$($option:expr),+ $(,)?]) => {
        Question {
            id: $id,
            category: Category::$category,
            text: Cow::Borrowed($text),
            options: [$($option),+],
        }
    };
}

/// The compiled-in bank, in authoring order.
pub static QUESTIONS: &[Question] = &[
    question!(1, Hustle, "You receive a messy Hinglish email from a client. How do you handle it with AI?", [
        answer!("Translate and draft a formal response using a specific persona prompt.", 5, 3, "Excellent! Persona prompting ensures professional tone."),
        answer!("Use Google Translate and fix the grammar manually.", 2, 2, "Functional, but slow. AI could do more."),
        answer!("Reply in English and ignore the Hinglish parts.", 1, 1, "Risky. You might miss critical local context."),
        answer!("Ask AI to 'summarize and formalize' the content before replying.", 4, 4, "Great workflow! Captures essence efficiently."),
    ]),
    question!(2, Hustle, "You need to extract data from 100 messy GST (Tax) invoice PDFs. Your move?", [
        answer!("Write a Python script using an LLM API to automate extraction.", 5, 4, "The gold standard for scalability."),
        answer!("Use a no-code AI tool like Zapier or Docsumo to build a flow.", 4, 5, "Smart! High efficiency without reinventing the wheel."),
        answer!("Process them one by one using ChatGPT/Claude.", 2, 1, "Tedious and prone to error for large volumes."),
        answer!("Assign it to an intern to do manually.", 1, 1, "Classic 'Old School' - wasting human potential."),
    ]),
    question!(3, Hustle, "A client asks for a 'Cyberpunk Diwali' social media poster. How do you get it?", [
        answer!("Use Midjourney/DALL-E with specific cultural and style descriptors.", 5, 4, "Perfect blending of local culture and global tech."),
        answer!("Search for a stock photo and add filters in Canva.", 2, 2, "Safe but generic. Won't stand out in the feed."),
        answer!("Ask a designer to manually illustrate it over 3 days.", 1, 2, "Quality is good, but the speed of market is faster."),
        answer!("Use AI to generate 10 variations and let the client choose one.", 4, 5, "Agile creative process! Minimizes revision loops."),
    ]),
    question!(9, Hustle, "You have 5 minutes to read a 100-page RBI (Reserve Bank of India) compliance PDF. What do you do?", [
        answer!("Upload it to a RAG-based AI tool and ask for 'Top 5 impacts on our business'.", 5, 4, "Perfect use of RAG for specialized knowledge retrieval."),
        answer!("Skim the first and last 10 pages manually.", 1, 2, "High risk of missing critical mid-section clauses."),
        answer!("Use ChatGPT's standard summary feature without specific context.", 3, 3, "Better than nothing, but may hallucinate details without proper prompting."),
        answer!("Ask AI to 'Explain like I'm a CFO' to get the strategic gist.", 4, 5, "Strategic! Tailoring AI output to your role is a pro move."),
    ]),
    question!(10, Hustle, "You need to find the best way from Whitefield to Koramangala (Bangalore) on a Friday 5 PM. AI says:", [
        answer!("Use an AI agent that combines Google Maps API with historical traffic trends.", 5, 4, "Data-driven decision making at its best."),
        answer!("Just take a cab and hope for the best.", 1, 1, "You'll be stuck in traffic for 3 hours. RIP."),
        answer!("Ask ChatGPT for the 'best route' (without real-time data access).", 2, 2, "ChatGPT's knowledge might be outdated. Use real-time tools."),
        answer!("Use a local AI-powered commute app like 'Namma Yatri' with traffic insights.", 4, 5, "Local context + Tech = Smooth ride."),
    ]),
    question!(11, Hustle, "Your boss wants a weekly report from 10 different Slack channels and Jira boards. You:", [
        answer!("Manually copy-paste for 4 hours every Friday.", 1, 1, "The 'Hustle' means working smarter, not harder."),
        answer!("Set up a Zapier/Make automation to feed data into a central AI summarizer.", 5, 5, "You've just automated your way to a promotion."),
        answer!("Ask AI to 'Write a summary' based on your manual notes.", 3, 3, "Semi-automated. Good start, but could be better."),
        answer!("Use a built-in Slack AI summary tool if available.", 4, 4, "Smart use of platform-native AI features."),
    ]),
    question!(4, Mindset, "OpenAI just released a model that makes your core skill 80% automated. Your reaction?", [
        answer!("Excited! I can now focus on high-level strategy and client relations.", 2, 5, "The winning mindset for the next decade."),
        answer!("Panic. I need to find a new career path immediately.", 1, 1, "Fear is real, but pivot beats panic."),
        answer!("Skepticism. I'll wait to see if it actually works for my niche.", 2, 2, "Caution is okay, but early adopters get the market share."),
        answer!("I'll spend my weekend learning how to 'pilot' this new model.", 5, 4, "Proactive. You're building your moat."),
    ]),
    question!(5, Mindset, "Your colleague uses AI to do 40 hours of work in 4 hours and gets promoted. You think:", [
        answer!("That's cheating. They aren't doing the 'real' work.", 1, 1, "The market pays for results, not struggle."),
        answer!("I need to ask them for their prompts and tools immediately.", 3, 5, "High learning agility. Knowledge sharing is key."),
        answer!("I'll try to find an even better tool to outshine them.", 4, 4, "Competitive spirit fueled by tech curiosity."),
        answer!("Compliment them but continue my manual process to be safe.", 1, 2, "Polite, but you're being left behind."),
    ]),
    question!(12, Mindset, "AI generated a design that the client loves, but you think it's 'generic'. You:", [
        answer!("Throw it away and do it from scratch to maintain 'artistic integrity'.", 1, 2, "Pride can be a bottleneck. The client's needs come first."),
        answer!("Use the AI draft as a 'base' and add your unique human touch.", 4, 5, "Cyborg creativity! Combining AI speed with human taste."),
        answer!("Just give it to the client. If they like it, I'm done.", 3, 3, "Efficient, but you're not adding much value as a professional."),
        answer!("Ask AI to 'make it more edgy/premium' until it satisfies you too.", 5, 4, "Mastering the feedback loop with AI."),
    ]),
    question!(13, Mindset, "A new AI tool costs $20/month. Your company won't pay for it. You:", [
        answer!("Forget it. I'm not paying for work tools from my own pocket.", 1, 1, "Short-sighted. Think of it as an investment in YOUR skills."),
        answer!("Pay for it yourself and use it to finish work 2x faster.", 4, 5, "Strategic investment in your own productivity moat."),
        answer!("Wait for a free alternative to come out.", 2, 2, "You're losing the 'Early Adopter' advantage."),
        answer!("Create a demo of how it saves time and pitch it to the management again.", 3, 5, "Leadership mindset. You're driving change."),
    ]),
    question!(6, Ethics, "You need to debug a proprietary algorithm. Is it okay to paste it into ChatGPT?", [
        answer!("Yes, as long as I use the 'Incognito/Temporary' chat mode.", 4, 2, 2, "Better, but still risky for high-security code."),
        answer!("No. I should use an enterprise-grade AI with data privacy guarantees.", 5, 4, 5, "Perfect. You understand corporate data sovereignty."),
        answer!("Yes, AI is just a tool, everyone does it.", 3, 1, 1, "Dangerous. This is how major leaks happen."),
        answer!("Only after anonymizing sensitive logic and variable names.", 4, 3, 4, "Good pragmatic approach to safety."),
    ]),
    question!(7, Ethics, "AI generates a 'confident' answer that sounds wrong. What's your protocol?", [
        answer!("Trust it. It's trained on more data than I've ever seen.", 1, 1, 1, "Never blindly trust. AI 'hallucinates' regularly."),
        answer!("Cross-verify with 2 independent sources or official docs.", 3, 5, 5, "Critical thinking is the ultimate human superpower."),
        answer!("Ask the AI to 'explain its reasoning' to find the logic gap.", 5, 4, 4, "Advanced! You know how to audit the AI's path."),
        answer!("Reject it and do the work manually from scratch.", 2, 2, 4, "Safe, but inefficient. Learn to verify, not just reject."),
    ]),
    question!(8, Ethics, "You find a colleague using Deepfake tech to impersonate a manager in a meeting. You:", [
        answer!("Report it immediately. This is a severe ethics violation.", 3, 3, 5, "Integrity is non-negotiable in the AI era."),
        answer!("Keep quiet. It's just a harmless prank.", 1, 1, 1, "Wrong. This erodes trust and could be illegal."),
        answer!("Confront the colleague and explain the risks to the company.", 2, 4, 4, "Good leadership. Educational approach to ethics."),
        answer!("Laugh along and ask them how they did it.", 3, 2, 2, "Curious, but ethically blind."),
    ]),
    question!(14, Ethics, "You are hiring and AI ranks a candidate low because of their 'gap year'. You:", [
        answer!("Reject the candidate automatically. AI knows best.", 2, 1, 1, "Algorithmic bias! Gap years often mean growth or caregiving."),
        answer!("Manually review the top 20 'rejected' candidates to check for bias.", 3, 4, 5, "Excellent. You are auditing the AI for fairness."),
        answer!("Ignore the AI ranking and read all resumes yourself.", 1, 2, 4, "Fair, but you're losing the efficiency of AI."),
        answer!("Adjust the AI prompt to 'Ignore career gaps, focus on skills'.", 5, 4, 4, "Proactive bias mitigation through prompt engineering."),
    ]),
    question!(15, Ethics, "You use AI to write 90% of a client's project. Do you tell them?", [
        answer!("No. If the quality is good, it doesn't matter how it was made.", 3, 2, 2, "Transparency builds long-term trust."),
        answer!("Yes, and explain how AI helped achieve better results faster.", 4, 5, 5, "Modern professionalism. You're selling 'AI-augmented excellence'."),
        answer!("Only if they ask specifically.", 2, 3, 3, "Grey area. Better to be proactive about your process."),
        answer!("I'll say it's 'proprietary automation' without mentioning AI.", 4, 3, 2, "Misleading. AI isn't a secret, it's a tool."),
    ]),
    question!(16, Hustle, "You need to build a 'Swiggy-like' UI prototype for a pitch in 2 hours. You:", [
        answer!("Use a screenshot-to-code AI tool to clone the basic layout.", 5, 4, "Lightning fast execution!"),
        answer!("Manually code the CSS and HTML from scratch.", 2, 1, "You'll miss the deadline. Speed is the new currency."),
        answer!("Describe the UI to v0.dev or a similar LLM-UI tool.", 4, 5, "Perfect. High quality + High speed."),
        answer!("Find a free template online and try to edit it.", 3, 3, "Good, but AI could give you a more custom result."),
    ]),
    question!(17, Mindset, "Your team is using 5 different AI tools and feels 'overwhelmed'. As a leader, you:", [
        answer!("Ban AI tools for a week to 'reset' and focus on manual work.", 1, 1, "Regression isn't the solution to complexity."),
        answer!("Standardize on 1-2 core tools and build a 'prompt library' for the team.", 4, 5, "Strategic leadership. Reducing friction through standardization."),
        answer!("Tell them to 'figure it out' because AI is the future.", 2, 2, "Lack of support leads to burnout and poor adoption."),
        answer!("Hold a 'Knowledge Share' session where everyone shows their best AI hacks.", 3, 5, "Building a culture of collaborative learning."),
    ]),
    question!(18, Ethics, "AI gives you a medical/legal advice for a friend. You:", [
        answer!("Pass it on as 'expert advice' because the AI sounds very confident.", 1, 1, 1, "Extremely dangerous. AI hallucinations can have real-world consequences."),
        answer!("Tell them it's AI-generated and must be verified by a pro.", 3, 4, 5, "Responsible AI usage. Always cite your 'non-human' source."),
        answer!("Ignore the AI and tell them to see a doctor/lawyer.", 2, 2, 4, "Safe, but AI could have helped summarize the problem first."),
        answer!("Use AI to 'double check' the advice against official government portals.", 5, 4, 4, "Proactive verification. Using AI to audit AI."),
    ]),
    question!(19, Hustle, "You need to automate a task where data from Gmail is saved to Google Drive and Slack. You:", [
        answer!("Manually download and upload every time.", 1, 1, "You're losing hours of productive time."),
        answer!("Use Zapier/Make and ask AI to 'design the logic' for the workflow.", 4, 5, "Perfect. No-code + AI is the productivity sweet spot."),
        answer!("Ask a developer to build a custom integration for you.", 2, 3, "Effective, but slow and expensive. Try self-serve AI tools."),
        answer!("Write a custom Python script using AI to handle the API calls.", 5, 4, "High-tech approach. Great for scalability."),
    ]),
    question!(20, Hustle, "A client sends a video in Tamil/Malayalam, but you only know English. You:", [
        answer!("Ask a colleague to translate it for you.", 1, 2, "Slow and dependent. Use AI to be self-sufficient."),
        answer!("Use an AI transcription and translation tool (like Whisper).", 5, 5, "Excellent! Breaking language barriers with tech."),
        answer!("Try to guess the meaning from visual cues.", 1, 1, "Dangerous. You'll miss the nuances."),
        answer!("Use a mobile app to 'listen and translate' in real-time.", 3, 4, "Good on-the-go solution."),
    ]),
    question!(21, Mindset, "Your company is switching to a new AI-first CRM. Your reaction is:", [
        answer!("Complaining about 'another tool to learn'.", 1, 1, "Resistance to change is the biggest career blocker."),
        answer!("Being the first to sign up for the training and exploring features.", 4, 5, "Early adopters are always in high demand."),
        answer!("Waiting for others to learn it and then asking them for help.", 2, 3, "Passive learning. You're missing the chance to lead."),
        answer!("Searching for 'AI hacks' to make the new CRM work even better.", 5, 4, "Proactive mindset! You're optimizing the system."),
    ]),
    question!(22, Mindset, "AI produces a better report than you did. You feel:", [
        answer!("Threatened and angry. AI is stealing my credit.", 1, 1, "Shift your perspective: AI is a tool to make YOU better."),
        answer!("Relieved! Now I can focus on the 'human' insights and strategy.", 3, 5, "Correct. Use AI for the 'what', you provide the 'why'."),
        answer!("Curious. How did it structure the data better than I did?", 4, 4, "Analytical mindset. Learning from the machine."),
        answer!("Determined to learn how to prompt it to be even better.", 5, 4, "Mastery mindset. You are the director, AI is the actor."),
    ]),
    question!(23, Mindset, "A project requires a skill you don't have (e.g., SQL). You:", [
        answer!("Say 'I don't know how to do that' and pass the task.", 1, 1, "In the AI era, 'I don't know' should be followed by 'but AI can teach me'."),
        answer!("Use AI to write the SQL and explain each line to you.", 5, 5, "Perfect. Using AI as a tutor and an executor."),
        answer!("Sign up for a 3-month course to learn SQL manually.", 2, 2, "Too slow for modern business. Learn-by-doing with AI."),
        answer!("Find a no-code tool that handles the data for you.", 3, 4, "Pragmatic solution. Good use of tool stack."),
    ]),
    question!(24, Ethics, "You notice AI-generated recruitment data consistently ignores candidates from certain colleges. You:", [
        answer!("Ignore it. The AI must have found a statistical reason.", 1, 1, 1, "This is classic algorithmic bias. It's illegal and unethical."),
        answer!("Investigate the training data and report the bias to HR.", 4, 4, 5, "High integrity. You are protecting the company's values."),
        answer!("Try to 'trick' the AI by changing the filter settings.", 3, 3, 3, "Band-aid fix. The underlying model needs fixing."),
        answer!("Ask AI to 'justify' its ranking to find the bias source.", 5, 4, 4, "Technical auditing. You're using AI to debug its own ethics."),
    ]),
    question!(25, Ethics, "A client asks for 'original work' but you used AI for 50%. You:", [
        answer!("Tell them it's 100% human-made to avoid conflict.", 1, 2, 1, "Lying about AI usage is a major trust risk."),
        answer!("Be transparent and show how AI was used as a 'creative assistant'.", 4, 5, 5, "Honesty is the best policy. Most clients value the quality and speed."),
        answer!("Don't mention AI unless they ask about the process.", 3, 3, 3, "Omission isn't always lying, but it's not proactive trust-building."),
        answer!("Charge a premium for the 'AI-augmented' efficiency.", 5, 4, 2, "Smart business, but ethics of 'premium' for automation can be tricky."),
    ]),
    question!(26, Hustle, "You need to create a 2025 holiday calendar for all Indian states. You:", [
        answer!("Manually search and type into Outlook for 2 hours.", 1, 1, "AI can do this in 10 seconds. Value your time!"),
        answer!("Ask AI to 'generate a CSV file' for the holidays and import it.", 5, 4, "Professional! Clean and efficient."),
        answer!("Search for a public calendar link and subscribe.", 3, 3, "Good, but AI could give you a more tailored list (e.g., only tech holidays)."),
        answer!("Ask AI to list them and then copy-paste manually.", 2, 2, "Half-way there. Automate the 'paste' part too!"),
    ]),
    question!(27, Hustle, "Theme: Text & Communication. You need to send 50 personalized LinkedIn messages to potential leads. AI approach?", [
        answer!("Ask AI to generate 50 unique intros based on their LinkedIn 'About' sections.", 5, 4, "Elite personalization. This scales human connection."),
        answer!("Use a generic template and copy-paste.", 1, 1, "Spam behavior. Low response rate guaranteed."),
        answer!("Send a link to your portfolio with a 'Check this out' message.", 2, 2, "Lazy. People value context."),
        answer!("Use AI to find their email and send a formal pitch instead.", 3, 3, "Effective, but missing the chance for a warm LinkedIn start."),
    ]),
    question!(28, Hustle, "Theme: Text & Communication. Your Zoom transcript is full of 'Umm' and 'Like'. How to get Action Items?", [
        answer!("Manually edit the 50-page transcript for 2 hours.", 1, 1, "Waste of high-value human time."),
        answer!("Paste into AI with a prompt 'Extract key decisions and action items with owners'.", 5, 4, "Perfect use of LLM summarization."),
        answer!("Send the raw transcript to everyone and tell them to find their own tasks.", 2, 1, "Information overload. You're causing friction."),
        answer!("Use AI to 'rewrite' the whole meeting into a script for future reference.", 4, 3, "Good, but focus on the 'Action Items' first."),
    ]),
    question!(29, Hustle, "Theme: Code & Data. You have a 100-page RBI (Reserve Bank of India) compliance PDF. You need to know if it affects your startup in 5 mins.", [
        answer!("Read as fast as you can and hope for the best.", 1, 2, "High risk of missing critical details."),
        answer!("Upload to a RAG-enabled AI and ask 'What are the top 3 risks for a fintech startup?'.", 5, 5, "Masterful. Targeted information retrieval."),
        answer!("Search for 'keywords' like 'Penalty' or 'Deadline' using Ctrl+F.", 3, 3, "Traditional, but lacks contextual understanding."),
        answer!("Ask a legal consultant to summarize it for you by tomorrow.", 2, 3, "Safe but slow. In AI era, speed is a competitive edge."),
    ]),
    question!(30, Hustle, "Theme: Code & Data. You need to create a sales dashboard but don't know if you should use a Bar chart or Scatter plot. You:", [
        answer!("Pick the one that 'looks prettier'.", 1, 2, "Data visualization is about clarity, not just aesthetics."),
        answer!("Describe your data to AI and ask for the best visualization strategy.", 5, 4, "Using AI as a specialized consultant."),
        answer!("Create both and see which one makes sense to you.", 3, 3, "Honest effort, but inefficient."),
        answer!("Use the default Excel 'Recommended Charts' without checking.", 2, 2, "Passive. You're letting basic algorithms decide your story."),
    ]),
    question!(31, Hustle, "Theme: Creative & Design. You have 200 product photos with messy backgrounds. You need them white-backgrounded for Amazon India.", [
        answer!("Use a batch-processing AI tool like Photoroom or Canva Magic Studio.", 5, 5, "Efficiency 101. Scaling quality instantly."),
        answer!("Hire a freelancer to manually edit them in Photoshop.", 2, 2, "Expensive and slow. AI does this in seconds now."),
        answer!("Try to do it yourself one-by-one late at night.", 1, 1, "Founder burnout is real. Automate the boring stuff."),
        answer!("Ask the photographer to re-shoot everything on a white wall.", 1, 1, "Massive waste of logistics and money."),
    ]),
    question!(32, Mindset, "Theme: Learning Agility. A new AI tool (e.g., Sora for video) is released. Your first reaction is:", [
        answer!("Panic: 'My video editing skills are now useless'.", 1, 1, "Fear stops growth. Skills evolve, they don't just die."),
        answer!("Curiosity: 'How can I use this to offer a new service to my clients?'.", 4, 5, "Growth mindset. Opportunity is where the change is."),
        answer!("Skepticism: 'It probably looks fake. I'll stick to my old ways'.", 2, 2, "Skepticism is good, but don't let it become an excuse for stagnation."),
        answer!("Search for a YouTube tutorial immediately to see its limits.", 5, 4, "Active learner. You want to understand the 'physics' of the new tool."),
    ]),
    question!(33, Mindset, "Theme: Change Management. Your CEO announces 'AI-First' transformation, but your manager is secretly resisting it. You:", [
        answer!("Side with your manager to keep your life easy.", 1, 1, "You're attaching yourself to a sinking ship."),
        answer!("Keep using AI tools privately to boost your own productivity.", 3, 4, "Smart, but missing the chance to lead cultural change."),
        answer!("Share your 'AI wins' in the team Slack to show the value to everyone.", 4, 5, "Change Agent. You're leading from the middle."),
        answer!("Report your manager to the CEO.", 2, 2, "Aggressive. Try proving the value through results first."),
    ]),
    question!(34, Mindset, "Theme: Human-AI Collaboration. You are using AI for a project. Do you say 'Thank you' or 'Please' to the AI?", [
        answer!("Yes, it helps me maintain a polite mindset even with humans.", 3, 5, "Interesting. You treat interaction as a reflection of your own character."),
        answer!("No, it's a machine. Efficiency is all that matters.", 5, 3, "Pragmatic. You see the tool for what it is: code."),
        answer!("Sometimes, when it gives an exceptionally good answer.", 4, 4, "Emotional resonance with high-quality output."),
        answer!("I don't even think about it.", 2, 2, "Neutral. You haven't fully internalized the 'interface' nature of AI."),
    ]),
    question!(35, Mindset, "Theme: Career Resilience. A colleague gets promoted because they 'AI-automated' their whole department. You feel:", [
        answer!("Jealous: 'They cheated their way to the top'.", 1, 1, "Automation isn't cheating; it's leverage."),
        answer!("Inspired: 'I need to learn what tools they used and do it better'.", 4, 5, "Competitive growth mindset."),
        answer!("Anxious: 'Will I be next to be automated?'.", 2, 2, "Anxiety is a signal to upgrade your skills."),
        answer!("Indifferent: 'I'll just do my job the traditional way'.", 1, 1, "The traditional way is becoming the obsolete way."),
    ]),
    question!(36, Mindset, "Theme: Strategic Vision. You're starting a new company. Do you hire 10 juniors or 2 seniors with high AI proficiency?", [
        answer!("10 juniors. More 'hands' mean more work done.", 1, 1, "Old-world thinking. Management overhead will kill you."),
        answer!("2 seniors with AI. They can do the work of 20 with the right tools.", 5, 5, "The 'Lean Startup' mindset for 2025. High leverage."),
        answer!("A mix of both, focusing on traditional roles.", 2, 3, "Conservative. You're missing the efficiency curve."),
        answer!("I'd try to do it all myself with AI first.", 4, 4, "Solo-preneur spirit. Good for testing, hard for scaling."),
    ]),
    question!(37, Ethics, "Theme: Data Privacy. You want to debug a customer's payment issue. Can you paste their transaction log into ChatGPT?", [
        answer!("Yes, AI needs the full context to find the bug.", 2, 2, 1, "Severe PII (Personally Identifiable Information) violation. Instant fireable offense in most firms."),
        answer!("Only if I anonymize the names, emails, and phone numbers first.", 4, 4, 4, "Better, but still risky. Use local, secure LLMs for sensitive data."),
        answer!("No, never. I'll describe the 'logic' of the error instead of pasting data.", 5, 5, 5, "High integrity. You protect customer trust above all."),
        answer!("I'll use the 'Enterprise' version, so it's safe anyway.", 3, 3, 3, "Enterprise is safer, but company policy usually still forbids raw data pasting."),
    ]),
    question!(38, Ethics, "Theme: Hallucinations. AI quotes a '2024 Supreme Court of India' ruling that sounds perfect for your case. You:", [
        answer!("Include it in your legal brief immediately.", 1, 1, 1, "Never trust, always verify. AI 'hallucinates' fake laws often."),
        answer!("Search for the case number on official government portals (Indiakanoon, etc.).", 5, 5, 5, "The only correct path. Human-in-the-loop is mandatory."),
        answer!("Ask AI to 'provide a link' to the ruling.", 3, 3, 3, "AI can hallucinate the link too! Not a real verification."),
        answer!("Paraphrase it so it's harder to track if it's wrong.", 1, 1, 1, "This is deceptive and dangerous."),
    ]),
    question!(39, Ethics, "Theme: Bias & Fairness. Your AI recruitment tool keeps rejecting candidates from 'Non-Tier 1' colleges. You:", [
        answer!("Trust it. The AI knows who will perform better.", 1, 1, 1, "This is systemic bias. You're missing out on 'hidden gems' and being unfair."),
        answer!("Manually audit a random sample of rejected 'Non-Tier 1' resumes.", 4, 4, 5, "Proactive bias detection. Essential for ethical HR."),
        answer!("Tell HR to 'fix the algorithm' but don't check it yourself.", 2, 2, 3, "Passive. Ethics is everyone's responsibility."),
        answer!("Adjust the 'prompt' to explicitly value diverse backgrounds.", 5, 4, 4, "Technical solution to a social problem. Good first step."),
    ]),
    question!(40, Ethics, "Theme: IP & Copyright. You used Midjourney to create a stunning brand character. Can you trademark it?", [
        answer!("Yes, I prompted it, so I own it.", 2, 2, 2, "Legally murky. Current laws (US/India) often don't allow copyright for pure AI art."),
        answer!("No, but I can use it as a reference and have a human artist redraw it.", 4, 5, 5, "The safest legal path for brand assets."),
        answer!("I'll just use it and hope nobody notices.", 1, 1, 1, "Recipe for a future lawsuit if you go big."),
        answer!("I'll check the AI tool's 'Terms of Service' for commercial rights.", 5, 4, 4, "Due diligence. Always read the fine print."),
    ]),
    question!(41, Ethics, "Theme: Workplace Ethics. You're a freelancer charging hourly. You use AI to do a 5-hour task in 5 minutes. Do you bill for 5 hours?", [
        answer!("Yes, I'm being paid for the 'value', not the 'time'.", 3, 5, 3, "A common debate. Consider moving to 'Value-Based Pricing' instead of hourly."),
        answer!("No, that's lying. I'll bill for 1 hour and explain the efficiency.", 2, 3, 5, "Radical honesty. Might lose you money, but builds deep trust."),
        answer!("I'll bill for 3 hours as a 'middle ground'.", 1, 1, 2, "Inconsistent ethics. Better to have a clear policy."),
        answer!("I'll use the extra 4 hours to do even more for the client.", 5, 4, 5, "Over-delivery. This is how you win in the AI era."),
    ]),
    question!(42, Hustle, "Theme: Automation & Agents. You need to plan a 3-day business trip to Mumbai with a 20k INR budget. You:", [
        answer!("Ask AI to 'Plan a 3-day Mumbai itinerary under 20k, staying near Bandra'.", 5, 4, "Smart use of AI as a personal travel agent."),
        answer!("Manually search Makemytrip and TripAdvisor for 3 hours.", 1, 2, "Inefficient. AI can consolidate this data in seconds."),
        answer!("Call a travel agent and pay them a commission.", 2, 2, "Old school. You're paying for information that's free via AI."),
        answer!("Go without a plan and 'figure it out' there.", 1, 1, "Risky and likely to exceed budget."),
    ]),
    question!(43, Hustle, "Theme: Desi Context. You're not a cricket fan but need to join an IPL discussion at the office. You:", [
        answer!("Ask AI: 'Summarize last night's IPL match highlights for office small talk'.", 5, 5, "Social engineering with AI! Perfect for 'fitting in' effortlessly."),
        answer!("Sit silently and feel left out.", 1, 1, "Missing out on valuable networking opportunities."),
        answer!("Try to watch the whole 4-hour replay in the morning.", 2, 1, "Terrible ROI on your time."),
        answer!("Pretend you know and make up random stats.", 1, 1, "High risk of being caught and looking foolish."),
    ]),
    question!(44, Hustle, "Theme: Desi Context. A landlord sends a 15-page rent agreement for a flat in HSR Layout. You:", [
        answer!("Sign it immediately because you love the flat.", 1, 1, "Danger! Hidden clauses can cost you lakhs later."),
        answer!("Upload to AI and ask 'Highlight any unfair clauses like 10% annual rent hikes'.", 5, 4, "Proactive legal auditing. This is how you protect yourself."),
        answer!("Read every single line yourself for 2 hours.", 3, 2, "Diligence is good, but AI is faster and more precise at spotting patterns."),
        answer!("Ask a lawyer friend to 'take a quick look'.", 2, 3, "Effective but depends on someone else's schedule."),
    ]),
    question!(45, Mindset, "Theme: Learning Agility. You're a marketing major. AI makes coding easier. Do you try to learn basic Python?", [
        answer!("Yes, I'll use AI as a tutor to build simple automation scripts.", 5, 5, "The 'T-Shaped' professional. Cross-disciplinary skills are elite."),
        answer!("No, I'm a 'creative' person, coding isn't for me.", 1, 1, "Fixed mindset. In 2025, 'creative' and 'technical' are merging."),
        answer!("I'll just wait until AI can do 100% of the coding without me.", 2, 2, "Passive. You'll miss the chance to direct the AI effectively."),
        answer!("I'll take a traditional 6-month offline coding class.", 2, 1, "Too slow. Use 'Just-in-Time' learning with AI."),
    ]),
    question!(46, Mindset, "Theme: Change Management. An employee uses AI to finish a week's work in 1 day. Your reaction as a manager:", [
        answer!("Give them 4 more days of work immediately.", 1, 1, "Punishing efficiency. You'll kill their motivation to innovate."),
        answer!("Ask them to teach the whole team their 'AI workflow'.", 5, 5, "Scalable leadership. You're turning a solo win into a team win."),
        answer!("Ignore it as long as the work is done.", 2, 3, "Neutral. You're missing a massive optimization opportunity."),
        answer!("Ban AI to ensure everyone works the same 40 hours.", 1, 1, "Luddite management. Your best talent will quit."),
    ]),
    question!(47, Mindset, "Theme: Strategic Vision. Your competitor uses AI to cut prices by 30%. Your strategy:", [
        answer!("Match the price cut and fire 30% of your staff.", 1, 1, "Panic move. You're not solving the underlying efficiency gap."),
        answer!("Invest in 'Agentic AI' to offer 24/7 personalized service they can't match.", 5, 5, "Strategic pivoting. Use AI for 'differentiation', not just 'cost'."),
        answer!("Run a marketing campaign about 'Hand-made/Human-centric' value.", 2, 4, "Niche play. Might work, but the mass market will still choose the 30% cheaper option."),
        answer!("Complain to the government about 'unfair AI competition'.", 1, 1, "Futile. The technology genie is out of the bottle."),
    ]),
    question!(48, Ethics, "Theme: Data Privacy. You're using a 'Free' AI tool to analyze company strategy. What's the hidden cost?", [
        answer!("There is no cost, it's open source.", 1, 1, 1, "Naive. If it's free, YOUR data is the training fuel for their next model."),
        answer!("Your data becomes part of their public training set.", 5, 4, 5, "Correct. This is how corporate secrets get 'leaked' into AI answers."),
        answer!("The output might be slightly lower quality.", 2, 2, 2, "Secondary concern. Privacy is the primary risk here."),
        answer!("You have to see some ads in the sidebar.", 1, 1, 2, "Irrelevant. Focus on the data flow."),
    ]),
    question!(49, Ethics, "Theme: Bias & Fairness. An AI for 'Credit Scoring' in India rejects all applicants from a specific rural Pin Code. You:", [
        answer!("Accept it. Rural areas are higher risk anyway.", 1, 1, 1, "Redlining. This is illegal discrimination based on geography."),
        answer!("Demand the AI developers 'De-bias' the model for location.", 4, 4, 5, "Correct. Ethical AI requires proactive fairness auditing."),
        answer!("Ignore it as long as the 'Total Default Rate' goes down.", 2, 1, 2, "Prioritizing profit over systemic fairness. High legal risk."),
        answer!("Manually approve every single rural applicant.", 3, 2, 4, "Inefficient. Fix the model, don't just patch the results."),
    ]),
    question!(50, Ethics, "Theme: IP & Copyright. You find a 'Deepfake' of your CEO praising a competitor. You:", [
        answer!("Laugh and share it on the office WhatsApp group.", 1, 1, 1, "You're helping spread harmful misinformation."),
        answer!("Report it to the platform and issue an 'AI-Authenticated' denial.", 5, 5, 5, "Professional crisis management in the AI age."),
        answer!("Try to make a Deepfake of their CEO as 'revenge'.", 1, 1, 1, "Childish and likely illegal."),
        answer!("Ignore it, people know it's fake.", 2, 2, 3, "Dangerous assumption. In 2025, fake content is indistinguishable."),
    ]),
    question!(51, Hustle, "Theme: Text & Communication. You need to reply to a complex client query in泰米尔语 (Tamil). You only speak Hindi. You:", [
        answer!("Use Google Translate and send it without checking.", 2, 2, "Risky. Nuance often gets lost in basic translation."),
        answer!("Use AI to translate, then ask it to 'Explain the tone and any cultural nuances'.", 5, 5, "Sophisticated. You're using AI for 'cultural intelligence', not just words."),
        answer!("Ask a Tamil-speaking colleague and wait for 2 days.", 1, 2, "Too slow for modern business. AI is 99% as good instantly."),
        answer!("Reply in English and tell them to translate it themselves.", 1, 1, "Arrogant. Customer experience is about meeting them where they are."),
    ]),
    question!(52, Mindset, "Theme: Human-AI Collaboration. AI gives you a 'brilliant' idea that goes against your 10 years of experience. You:", [
        answer!("Reject it. Experience always beats algorithms.", 1, 1, "Experience can also be a set of 'outdated biases'."),
        answer!("Run a small A/B test to see if the AI's idea actually works.", 5, 5, "Scientific mindset. Let the data settle the human-vs-machine debate."),
        answer!("Blindly follow the AI. It's smarter than me.", 2, 2, "Uncritical. AI lacks 'real-world common sense' which you still have."),
        answer!("Ask the AI to 'justify its reasoning' step-by-step.", 4, 4, "Critical inquiry. Understanding the 'why' before the 'what'."),
    ]),
    question!(53, Ethics, "Theme: Workplace Ethics. You use AI to generate your 'Personal OKRs' (Objectives & Key Results). You:", [
        answer!("Copy-paste them and tell your boss you spent all weekend thinking.", 1, 1, 1, "Dishonest. You're outsourcing your own career direction."),
        answer!("Use AI to 'draft' 10 options, then spend 2 hours refining the top 3.", 5, 4, 5, "Perfect. AI for 'breadth', Human for 'depth' and 'commitment'."),
        answer!("Refuse to use AI because OKRs should be 'purely human'.", 2, 2, 4, "Honest, but missing out on a great brainstorming tool."),
        answer!("Ask AI to 'monitor' your Slack to see if you met your OKRs.", 4, 3, 2, "Privacy nightmare. Don't automate surveillance on yourself."),
    ]),
    question!(54, Hustle, "Theme: Creative & Design. You need a Logo for a new 'Chai-Tech' startup. How to use DALL-E 3?", [
        answer!("Ask for 'A minimalist logo combining a tea leaf and a microchip, flat design'.", 5, 4, "Excellent prompt precision. Visualizing concepts quickly."),
        answer!("Ask for 'A cool logo for a tea company'.", 2, 2, "Too vague. AI will give generic, unusable results."),
        answer!("Draw it on a napkin and ask a designer to 'Make it digital'.", 1, 1, "Slow and misses the chance to explore 100 iterations in 1 minute."),
        answer!("Search for 'Tea Logo' on Pinterest and copy one.", 1, 1, "Plagiarism risk. Use AI to generate unique, original concepts."),
    ]),
    question!(55, Hustle, "Theme: Code & Data. You need to connect ChatGPT to your company's CRM. You:", [
        answer!("Ask AI to 'Generate a Python boilerplate for connecting OpenAI API to Salesforce'.", 5, 4, "Smart. Using AI to skip the 'setup' grunt work."),
        answer!("Manually read 200 pages of API documentation.", 2, 2, "Thorough, but inefficient. Use AI to summarize the 'How-to' first."),
        answer!("Hire an external consultant for a 2-week project.", 2, 2, "Expensive. Most simple API integrations are now DIY with AI."),
        answer!("Tell the client 'It's too technical and impossible'.", 1, 1, "The word 'impossible' is disappearing in the AI era."),
    ]),
    question!(56, Hustle, "Theme: Automation & Agents. You have 500 resumes to screen for a job in Bangalore. You:", [
        answer!("Use an AI Agent to filter for '3+ years experience' and 'Live in Bangalore'.", 5, 5, "High-volume processing. Saves 20 hours of HR time."),
        answer!("Read every single resume yourself over the weekend.", 1, 1, "Founder burnout! Your time is better spent interviewing the top 5."),
        answer!("Use 'Ctrl+F' for keywords on each file.", 2, 2, "Basic automation, but lacks the 'intelligence' to understand context."),
        answer!("Only look at the first 10 resumes and pick one.", 1, 1, "Lazy and likely to miss the best talent."),
    ]),
    question!(57, Mindset, "Theme: Learning Agility. A 22-year-old intern is better at prompting than you. You:", [
        answer!("Feel threatened and give them 'boring' non-AI tasks.", 1, 1, "Ego is the enemy of progress. You're stunting team growth."),
        answer!("Ask them to host a 'Lunch & Learn' to teach you and the team.", 4, 5, "Reverse Mentoring. A hallmark of a modern, humble leader."),
        answer!("Secretly watch what they type into ChatGPT.", 2, 2, "Passive. Just ask! AI culture is built on sharing prompts."),
        answer!("Tell them 'In the real world, we don't use shortcuts'.", 1, 1, "Outdated. AI isn't a shortcut; it's a jetpack."),
    ]),
    question!(58, Mindset, "Theme: Change Management. Your favorite design tool adds an 'AI Generate' button. You:", [
        answer!("Refuse to click it. 'Real art' is manual.", 1, 1, "The same was said about Photoshop when it replaced darkrooms."),
        answer!("Click it immediately to see how it can speed up your 'Layout' phase.", 5, 5, "Adaptive mindset. Use AI for the 'labor', you keep the 'vision'."),
        answer!("Only use it for 'inspiration' but never for final work.", 3, 4, "Good balance, but don't fear the final output if it's high quality."),
        answer!("Complain on Twitter/X about the 'death of creativity'.", 1, 2, "Creativity isn't dying; it's being democratized."),
    ]),
    question!(59, Ethics, "Theme: Hallucinations. You ask AI for a list of 'Top 10 Indian Fintech Founders' and it includes 2 fake names. You:", [
        answer!("Publish the list on your blog as is.", 1, 1, 1, "Irresponsible. You're spreading digital pollution."),
        answer!("Google each name to verify their LinkedIn profile before publishing.", 5, 5, 5, "Fact-checking is the #1 required skill in the AI era."),
        answer!("Ask AI 'Are you sure these are real?'.", 2, 2, 3, "AI will often just double-down on its lie. Use external verification."),
        answer!("Delete the 2 fake ones and keep the rest without checking.", 3, 3, 4, "Better, but how do you know the other 8 are 100% correct?"),
    ]),
    question!(60, Ethics, "Theme: IP & Copyright. You find a tool that 'Clones' a famous Bollywood singer's voice for your ad. You:", [
        answer!("Use it! It's cheaper than hiring them.", 3, 2, 1, "Likely a violation of 'Right of Publicity'. High risk of a major lawsuit."),
        answer!("Contact their agent for a 'Digital License' to use their AI voice.", 5, 5, 5, "The future of talent management. Respecting IP in the AI age."),
        answer!("Use it but don't tell anyone it's cloned.", 2, 2, 1, "Deceptive and unethical."),
        answer!("Hire a mimicry artist instead.", 1, 3, 4, "Safe, but missing out on the efficiency of AI licensing."),
    ]),
    question!(61, Hustle, "Theme: Code & Data. You have a messy Excel with 1000 rows of customer feedback. You want to know the 'Sentiment'. You:", [
        answer!("Read all 1000 rows and color-code them manually.", 1, 1, "Manual labor in the age of automation. Very low efficiency."),
        answer!("Use AI to 'Categorize each row as Positive/Negative/Neutral and summarize top 3 complaints'.", 5, 5, "Instant insight. Turning raw data into strategy."),
        answer!("Only read the first 10 and assume the rest are the same.", 1, 1, "Selection bias. You'll miss the silent majority's pain points."),
        answer!("Use a basic 'Keyword Search' for words like 'Bad' or 'Great'.", 3, 3, "Better than nothing, but misses sarcasm and context."),
    ]),
    question!(62, Mindset, "Theme: Strategic Vision. You're an HR head. AI can now handle 80% of 'Employee Queries'. You:", [
        answer!("Fire 80% of your HR team.", 1, 1, "Short-sighted. You're losing the 'human' in Human Resources."),
        answer!("Train your team to focus on 'Employee Wellness' and 'Culture Building' instead.", 5, 5, "Strategic upskilling. Moving from 'Admin' to 'Partner'."),
        answer!("Block the AI to protect your team's jobs.", 1, 1, "Luddite trap. A competitor will use AI and beat your efficiency."),
        answer!("Hire an 'AI Coordinator' to manage the bot.", 4, 4, "Good operational move, but need a bigger vision for the humans."),
    ]),
    question!(63, Ethics, "Theme: Workplace Ethics. You're an intern. Your boss asks you to 'Write a report'. You use AI 100%. You:", [
        answer!("Submit it as your own work.", 1, 1, 1, "Plagiarism. If the AI makes a mistake, YOU are responsible."),
        answer!("Submit it with a note: 'Drafted by AI, refined and fact-checked by me'.", 5, 5, 5, "Transparency is the new gold standard for professional trust."),
        answer!("Don't use AI because you think it's 'cheating'.", 1, 2, 4, "Honest, but you're working 10x slower than the world expects now."),
        answer!("Use AI but change every 5th word to hide it.", 2, 1, 1, "Deceptive and a waste of time. Focus on the 'value', not the 'hiding'."),
    ]),
    question!(64, Hustle, "Theme: Desi Context. You're stuck in Bangalore traffic for 2 hours. You:", [
        answer!("Doomscroll on Instagram.", 1, 1, "Brain rot. Use that time for growth!"),
        answer!("Listen to an AI-generated summary of a 50-page industry report.", 5, 5, "The 'Hustle' mindset. Turning wasted time into a competitive edge."),
        answer!("Call people for random chats.", 2, 2, "Social, but not strategic for your career."),
        answer!("Try to work on your laptop in the moving car.", 3, 1, "Recipe for motion sickness. Audio-learning is better for traffic."),
    ]),
    question!(65, Hustle, "Theme: Creative & Design. You need to shoot an Instagram Reel for a new app. How to use AI for the script?", [
        answer!("Ask AI: 'Generate a 30-second viral script with a hook, 3 value points, and a CTA'.", 5, 4, "Structured content creation. High-probability viral logic."),
        answer!("Wing it and record whatever comes to mind.", 1, 1, "Lack of structure often leads to low engagement."),
        answer!("Copy a script from a popular creator line-by-line.", 1, 2, "Plagiarism. AI helps you be 'original' faster, not just a copycat."),
        answer!("Ask AI to 'Find the trending sounds' for you.", 4, 3, "Good tactical move, but the script is the core."),
    ]),
    question!(66, Hustle, "Theme: Automation & Agents. You want to monitor your competitor's pricing every day. You:", [
        answer!("Manually visit their website every morning at 9 AM.", 1, 1, "Tedious and prone to forgetting. Use an Agent."),
        answer!("Set up a No-code Agent (like Browse.ai) to scrape and alert you on Slack.", 5, 5, "Strategic automation. You're building a 'Competitive Intelligence' system."),
        answer!("Ask a junior to 'keep an eye on it'.", 2, 2, "Waste of human talent for a purely mechanical task."),
        answer!("Wait for customers to tell you when the competitor is cheaper.", 1, 1, "Reactive. You've already lost the sale by then."),
    ]),
    question!(67, Mindset, "Theme: Learning Agility. You spent 3 months learning a manual skill that AI now does in 1 second. You feel:", [
        answer!("Like I wasted 3 months of my life.", 1, 1, "Negative perspective. You learned the 'process', which helps you manage the AI."),
        answer!("Relieved! Now I can use that skill to 'Quality Control' the AI output.", 4, 5, "Growth mindset. Your manual knowledge makes you a better 'Director'."),
        answer!("Determined to keep doing it manually to 'stay sharp'.", 2, 2, "Inefficient. Sharpness comes from solving new problems, not old ones."),
        answer!("Angry at the technology for 'stealing' my hard work.", 1, 1, "Resistance is futile. Evolution is the only path."),
    ]),
    question!(68, Mindset, "Theme: Career Resilience. AI makes 'Generalists' as productive as 'Specialists'. Do you:", [
        answer!("Become a 'Universalist'—using AI to handle Marketing, Sales, and Ops.", 5, 5, "The Solopreneur/Elite Employee model for 2025. Broad leverage."),
        answer!("Double down on your narrow specialty and ignore other areas.", 1, 1, "Risk of becoming a 'single point of failure' for your own career."),
        answer!("Wait for the company to tell you what to learn next.", 2, 2, "Passive. Your career is your own startup."),
        answer!("Focus purely on 'Soft Skills' like empathy and leadership.", 3, 4, "Solid strategy, but 'Soft Skills + AI' is the real superpower."),
    ]),
    question!(69, Ethics, "Theme: Data Privacy. A 3rd-party AI plugin asks for 'Read/Write access to your Gmail'. You:", [
        answer!("Grant it. I need the productivity boost!", 3, 2, 1, "Extreme security risk. You're giving an unknown entity access to all your secrets."),
        answer!("Decline and find a 'Privacy-First' tool that processes data locally.", 5, 5, 5, "Security-conscious professional. Protecting the 'Digital Perimeter'."),
        answer!("Only grant it for one specific email account that is 'empty'.", 4, 3, 3, "Sandboxing. A smart workaround, but still requires caution."),
        answer!("Check if the plugin is 'SOC2' or 'ISO' certified first.", 5, 4, 4, "Corporate-level due diligence."),
    ]),
    question!(70, Ethics, "Theme: Hallucinations. You ask AI for the 'Top 5 Legal Risks in the India DPDP Act' and it misses one major one. Why?", [
        answer!("The AI is stupid.", 1, 1, 2, "AI isn't stupid; it's a probabilistic model, not a database."),
        answer!("The knowledge cutoff might be before the latest amendment.", 5, 4, 4, "Correct. Always check the 'Recency' of the AI's data."),
        answer!("I didn't prompt it correctly.", 3, 4, 3, "Maybe, but some things are just outside its training data."),
        answer!("It's trying to protect the government.", 1, 1, 1, "Conspiracy thinking won't help you use the tool better."),
    ]),
    question!(71, Hustle, "Theme: Desi Context. You need to navigate a government portal for a Passport update. It's confusing. You:", [
        answer!("Ask AI to 'Explain the step-by-step process for Indian Passport renewal in 2025'.", 5, 5, "Using AI as a 'Bureaucracy Navigator'. Massive stress saver."),
        answer!("Go to the office and stand in line to ask questions.", 1, 1, "The old way. Waste of a whole day."),
        answer!("Hire an 'Agent' and pay 5000 INR.", 2, 2, "Expensive. Most info is online, just needs better 'parsing'."),
        answer!("Give up and wait for next year.", 1, 1, "Procrastination is the thief of opportunity."),
    ]),
    question!(72, Mindset, "Theme: Human-AI Collaboration. You're writing a blog. Do you use AI to 'Write it' or 'Outline it'?", [
        answer!("Write it. I'll just change a few words.", 2, 2, "Low effort. The 'soul' of the writing will be missing."),
        answer!("Outline it, then I'll write the stories and unique insights.", 5, 5, "The 'Hybrid' model. AI for structure, Human for 'magic'."),
        answer!("I write it first, then ask AI to 'Critique and find holes in my logic'.", 5, 5, "The 'Editor' model. High-level collaboration."),
        answer!("I don't use AI for creative work at all.", 1, 3, "Honest, but you're missing a powerful brainstorming partner."),
    ]),
    question!(73, Ethics, "Theme: Workplace Ethics. You see a colleague using AI to 'Fake' their video during a Zoom meeting. You:", [
        answer!("Report them to HR immediately.", 2, 2, 4, "A bit harsh. Maybe talk to them first?"),
        answer!("Ask them 'Wow, what tool are you using?' and try it yourself.", 4, 4, 1, "Curious, but you're ignoring the 'Deception' aspect of the ethics."),
        answer!("Tell them privately that it's risky and could hurt their reputation.", 5, 5, 5, "Empathetic and ethical leadership."),
        answer!("Ignore it. Not my business.", 2, 3, 3, "Neutral, but helps normalize a culture of 'faking it'."),
    ]),
    question!(74, Hustle, "Theme: Text & Communication. You're cold-emailing 50 VCs in India. You:", [
        answer!("Send the same generic email to all 50.", 1, 1, "Instant spam filter. 0% conversion rate."),
        answer!("Use AI to research each VC's recent investments and personalize the first 2 lines.", 5, 5, "Scale + Personalization. This is how you get meetings."),
        answer!("Hand-write all 50 emails over 2 days.", 2, 1, "Diligence is good, but you're working at human speed in an AI race."),
        answer!("Hire an intern to do the research for you.", 2, 3, "Effective, but slower and more expensive than AI."),
    ]),
    question!(75, Mindset, "Theme: Strategic Vision. You're a retail owner. A new 'AI-Powered' mall opens nearby. You:", [
        answer!("Lower your prices to compete.", 1, 2, "Race to the bottom. You can't beat their efficiency with just discounts."),
        answer!("Use AI to analyze your customer data and offer personalized loyalty rewards.", 5, 5, "Strategic adaptation. Use tech to deepen local customer bonds."),
        answer!("Protest to the local trade union.", 1, 1, "Blocking progress never works in the long run."),
        answer!("Ignore it and hope your 'regular' customers stay.", 2, 1, "Hope is not a strategy. The market is shifting."),
    ]),
    question!(76, Ethics, "Theme: Data Privacy. You're using an AI 'Meeting Notetaker'. It records a confidential salary discussion. You:", [
        answer!("Delete the recording and the AI summary immediately.", 5, 5, 5, "Data hygiene. Protecting employee sensitive info."),
        answer!("Read it secretly to see what others are making.", 1, 1, 1, "Breach of trust and ethics. This will ruin your reputation if found."),
        answer!("Share the summary with the whole team for 'transparency'.", 1, 2, 1, "Huge privacy violation. Salary info is strictly private."),
        answer!("Ask the AI to 'Anonymize' the names in the summary.", 4, 3, 3, "Better, but the context might still reveal who is who."),
    ]),
    question!(77, Hustle, "Theme: Code & Data. You need to build a website for your uncle's sweet shop (Mithai). You:", [
        answer!("Spend 2 months learning HTML/CSS from scratch.", 2, 1, "Honorable but too slow. Uncle needs the site now!"),
        answer!("Use an AI Website Builder to ship a professional site in 1 hour.", 5, 5, "Speed to Market. The most important metric for small businesses."),
        answer!("Hire a local agency for 50,000 INR.", 1, 2, "Expensive and overkill for a simple Mithai shop."),
        answer!("Just use a Facebook Page and forget the website.", 2, 3, "Functional, but lacks the professional brand of a custom site."),
    ]),
    question!(78, Mindset, "Theme: Organizational Culture. Your boss says 'AI is a fad'. You:", [
        answer!("Argue with them and show them 100 AI news articles.", 2, 2, "People hate being told they are wrong. Use 'Show, don't tell'."),
        answer!("Secretly use AI to do your work 3x faster, then show the results.", 5, 5, "Result-oriented persuasion. Evidence is the best argument."),
        answer!("Agree with them and stop using AI.", 1, 1, "You're letting your skills go obsolete to please a boss."),
        answer!("Quit and join an 'AI-First' startup.", 4, 4, "Bold move! If the culture is toxic to tech, it might be time."),
    ]),
    question!(79, Ethics, "Theme: Bias & Fairness. Your AI 'English Polish' tool keeps removing Indianisms like 'Kindly revert'. You:", [
        answer!("Accept it. I want to sound 'International'.", 2, 3, 2, "You're losing your cultural identity and 'Desi' charm."),
        answer!("Prompt the AI: 'Keep the Indian professional tone, but fix the grammar'.", 5, 5, 5, "Culturally sensitive AI use. Mastering the 'Hybrid' voice."),
        answer!("Stop using the tool. It's biased.", 2, 2, 4, "A bit extreme. Just need to prompt it better."),
        answer!("Manually fix it back every time.", 1, 1, 3, "Inefficient. Learn to 'guide' the AI, don't fight it."),
    ]),
    question!(80, Hustle, "Theme: Automation & Agents. You need to summarize a 2-hour long YouTube tutorial. You:", [
        answer!("Watch it at 2x speed and take notes.", 2, 2, "Still takes 1 hour. AI can do this in 10 seconds."),
        answer!("Use an AI YouTube Summarizer to get the top 5 takeaways instantly.", 5, 5, "Information leverage. You're learning at the speed of light."),
        answer!("Just read the comments to see what people said.", 1, 1, "Unreliable. Comments are often noisy and off-topic."),
        answer!("Skip the video and search for a blog post instead.", 3, 3, "Good, but the blog might not have the latest info from the video."),
    ]),
    question!(81, Mindset, "Theme: Learning Agility. A new AI model 'GPT-5' is released on a Friday night. You:", [
        answer!("Ignore it until Monday morning.", 1, 2, "In the AI world, a weekend is a lifetime. You're already behind."),
        answer!("Spend 2 hours on Friday night testing it on your hardest work tasks.", 5, 5, "The 'Early Adopter' edge. Curiosity is your greatest asset."),
        answer!("Wait for 'Experts' to post summaries on LinkedIn.", 2, 3, "Second-hand knowledge. You need 'First-hand' intuition."),
        answer!("Complain that 'Things are moving too fast'.", 1, 1, "The speed won't slow down. You need to speed up your learning."),
    ]),
    question!(82, Ethics, "Theme: IP & Copyright. You use AI to generate 'Stock Photos' for your website. You:", [
        answer!("Check if the AI tool uses 'Public Domain' or 'Licensed' training data.", 5, 4, 5, "Ethical sourcing. Protecting your business from IP claims."),
        answer!("Assume it's free since I generated it.", 2, 2, 2, "Dangerous assumption. The legal landscape is still shifting."),
        answer!("Only use real photos from Getty/Shutterstock.", 1, 2, 4, "Safe, but 10x more expensive and less unique than AI art."),
        answer!("Steal photos from Google Images and 'AI-Upscale' them to hide it.", 1, 1, 1, "Pure theft and deceptive. A recipe for legal disaster."),
    ]),
    question!(83, Hustle, "Theme: Desi Context. You're trying to explain AI to your grandmother in Hindi. You say:", [
        answer!("It's like a 'Duniya ka sabse samajhdaar munshi' (The world's smartest clerk).", 5, 5, "Perfect analogy. Localizing complex tech for better adoption."),
        answer!("It's a Neural Network with 175 Billion parameters.", 1, 1, "You've lost her. Communication is about the 'listener', not the 'speaker'."),
        answer!("It's magic, Dadi. Don't worry about it.", 2, 2, "Dismissive. Empower her with a simple mental model."),
        answer!("Show her a video of a robot dancing.", 3, 3, "Visuals help, but it doesn't explain the 'Intelligence' part."),
    ]),
    question!(84, Mindset, "Theme: Human-AI Collaboration. You're a doctor. AI says 'Diagnosis A', but your gut says 'Diagnosis B'. You:", [
        answer!("Trust your gut. Humans are better than machines.", 1, 1, "Guts can be biased. AI can see patterns you might miss."),
        answer!("Trust the AI. It's seen 10 million cases.", 2, 2, "AI can't 'see' the patient's subtle physical cues. Don't outsource your judgment."),
        answer!("Ask the AI to 'Show the evidence for Diagnosis A' and compare with your reasoning.", 5, 5, "The 'Centaur' model. Collaborative intelligence at its best."),
        answer!("Order more tests to let a 3rd party decide.", 4, 3, "Thorough, but expensive and slow for the patient."),
    ]),
    question!(85, Ethics, "Theme: Hallucinations. You ask AI for 'Recent GST changes in India' and it gives you 2022 data. You:", [
        answer!("File your taxes based on that data.", 1, 1, 1, "Financial suicide. AI data cutoffs are a massive trap."),
        answer!("Use AI to 'Find the official government PDF' and summarize that instead.", 5, 5, 5, "RAG (Retrieval Augmented Generation) mindset. Always ground AI in real docs."),
        answer!("Ask the AI 'Are you sure this is for 2025?'.", 2, 2, 3, "AI will say 'Yes' confidently while being wrong. Trust but verify."),
        answer!("Call your CA (Chartered Accountant) immediately.", 4, 3, 4, "Safe and professional, but you can save them time with AI-parsed docs."),
    ]),
    question!(86, Hustle, "Theme: Creative & Design. You need to make a PowerPoint for a big client. You have 30 minutes. You:", [
        answer!("Spend 25 mins on 'Animations' and 5 mins on 'Content'.", 1, 1, "Style over substance. A classic failure mode."),
        answer!("Use AI to 'Generate a 10-slide outline' and 'Design the layout' instantly.", 5, 5, "High-speed professional output. You win on both quality and speed."),
        answer!("Use a template from 2015 and just type the text.", 2, 2, "Looks dated. AI can give you a 'Modern/Elite' look in seconds."),
        answer!("Ask a colleague to 'Help me out quickly'.", 1, 3, "You're wasting someone else's time for a task AI can do better."),
    ]),
    question!(87, Mindset, "Theme: Organizational Culture. Your company bans ChatGPT. You:", [
        answer!("Use it secretly on your phone.", 3, 4, "The 'Shadow AI' worker. Effective but risky for your job."),
        answer!("Write a 1-page proposal on 'Safe AI Use' and present it to IT.", 5, 5, "Thought leadership. Changing the system from within."),
        answer!("Agree and go back to 'Manual' work.", 1, 1, "You're letting the company's fear stunt your career growth."),
        answer!("Complain in the cafeteria every day.", 1, 1, "Whining is not a strategy. Action is."),
    ]),
    question!(88, Ethics, "Theme: Bias & Fairness. You're an AI developer. Your 'Loan Approval' model is 99% accurate but rejects 100% of women. You:", [
        answer!("Deploy it. 99% accuracy is amazing!", 1, 1, 1, "This is a classic 'Fairness Failure'. Accuracy isn't everything."),
        answer!("Stop the deployment and 'Re-balance' the training data to remove gender bias.", 5, 5, 5, "Ethical Engineering. You're protecting the company from a PR and legal nightmare."),
        answer!("Just add a 'Manual Review' for all women applicants.", 3, 2, 3, "A 'Band-aid' fix. The underlying model is still broken."),
        answer!("Tell the marketing team to 'target only men' so the AI stays accurate.", 1, 1, 1, "Deeply unethical and likely illegal."),
    ]),
    question!(89, Hustle, "Theme: Code & Data. You want to build a simple 'Stock Market Alert' for your favorite Indian stocks. You:", [
        answer!("Ask AI to 'Write a Python script using yfinance to email me when Tata Motors hits 1000 INR'.", 5, 5, "Personalized finance automation. High value for low effort."),
        answer!("Manually check Moneycontrol 50 times a day.", 1, 1, "The 'Anxiety' method. Waste of mental energy."),
        answer!("Pay for a premium 'Stock Alert' app.", 2, 3, "Fine, but you're paying for something you can build in 5 minutes with AI."),
        answer!("Ask your 'Stock Expert' friend to call you.", 1, 2, "Unreliable. Friends have lives too."),
    ]),
    question!(90, Mindset, "Theme: Career Resilience. A news report says 'AI will replace 40% of jobs'. You:", [
        answer!("Panic and start looking for a 'Safe' government job.", 1, 1, "No job is 'Safe' from efficiency. The only safety is 'Adaptability'."),
        answer!("Ask: 'Which 40% of my DAILY tasks can AI do, so I can focus on the other 60%?'.", 5, 5, "The 'Augmentation' mindset. You're not being replaced; you're being upgraded."),
        answer!("Don't believe it. AI is overhyped.", 1, 1, "Denial is a dangerous strategy. Even if it's 20%, the impact is huge."),
        answer!("Start an 'AI-Proof' business like a physical tea stall.", 3, 4, "Creative, but even a tea stall needs AI for marketing and inventory now!"),
    ]),
    question!(91, Ethics, "Theme: Workplace Ethics. You're a teacher. A student's essay is 'Too Perfect'. You:", [
        answer!("Give them an A+ and ignore it.", 1, 2, 2, "You're failing as an educator. They haven't learned anything."),
        answer!("Ask them to 'Explain the core argument' in person to verify their understanding.", 5, 5, 5, "Oral examination. The only way to truly verify knowledge in the AI age."),
        answer!("Use an 'AI Detector' and fail them if it says 90% AI.", 2, 2, 2, "Detectors are notoriously unreliable and have high 'False Positives'."),
        answer!("Tell them 'Don't use AI' and make them rewrite it in class.", 3, 3, 4, "Fair, but doesn't teach them how to use AI 'Ethically'."),
    ]),
    question!(92, Hustle, "Theme: Automation & Agents. You need to book a table at a very busy restaurant in Mumbai. You:", [
        answer!("Call them 20 times until they pick up.", 1, 1, "Brute force. Inefficient use of your time."),
        answer!("Use an AI Agent (like Google Duplex) to call and book for you.", 5, 5, "Agentic lifestyle. Outsourcing the 'boring' to the bots."),
        answer!("Go there early and wait for 1 hour.", 2, 2, "Low-tech solution. Fine for a Sunday, bad for a business meeting."),
        answer!("Message the owner on Instagram.", 3, 4, "Social engineering. Effective, but doesn't scale."),
    ]),
    question!(93, Mindset, "Theme: Human-AI Collaboration. You're an architect. AI designs a building that looks like a giant samosa. You:", [
        answer!("Reject it. It's ridiculous.", 1, 2, "You might be missing a 'Viral/Iconic' design opportunity."),
        answer!("Ask AI: 'Why this shape?' then refine it into a 'Samosa-inspired' modern museum.", 5, 5, "Creative synergy. AI provides the 'weird' spark, you provide the 'taste'."),
        answer!("Build it exactly as the AI says.", 2, 2, "Lack of critical judgment. Buildings need to be functional, not just 'AI-weird'."),
        answer!("Tell the client 'The AI did it' if they don't like it.", 1, 1, "Blame-shifting. You are the one who 'signed off' on the design."),
    ]),
    question!(94, Ethics, "Theme: IP & Copyright. You use AI to generate 'Background Music' for your YouTube video. You:", [
        answer!("Just use it. AI music is 'Royalty Free' by default.", 2, 2, 2, "Not always! Check the tool's license for 'Commercial Use'."),
        answer!("Use an AI tool that 'Compensates the original artists' in its training set.", 5, 5, 5, "Ethical Consumption. Supporting the future of the 'Creative Economy'."),
        answer!("Only use music from 100-year-old composers (Public Domain).", 3, 3, 4, "Safe but boring. Your 'Tech' video doesn't need 18th-century violin."),
        answer!("Use a popular Bollywood song and hope you don't get a 'Copyright Strike'.", 1, 1, 1, "You WILL get a strike. Don't risk your channel's future."),
    ]),
    question!(95, Hustle, "Theme: Desi Context. You need to write a 'Legal Notice' to a noisy neighbor. You:", [
        answer!("Ask AI: 'Draft a polite but firm legal notice under Indian Law for noise nuisance'.", 5, 5, "Democratizing Law. AI gives you the 'language of power' for free."),
        answer!("Shout at them from your balcony.", 1, 1, "Ineffective and leads to more conflict."),
        answer!("Hire a lawyer for 2000 INR to write a letter.", 2, 2, "Expensive for a first step. AI can handle the 'Warning' phase."),
        answer!("Call the police immediately.", 2, 1, "Escalation without documentation is rarely successful."),
    ]),
    question!(96, Mindset, "Theme: Strategic Vision. You're a farmer. AI can now predict 'Crop Diseases' from a photo. You:", [
        answer!("Trust your eyes. I've been doing this for 30 years.", 1, 1, "Human eyes miss the 'Early signs' that AI can spot in pixels."),
        answer!("Use the AI app daily and 'Pre-emptively' spray only the infected plants.", 5, 5, "Precision Agriculture. Saving money and the environment with tech."),
        answer!("Wait for the government to provide the tech for free.", 2, 2, "Passive. You're losing crops while you wait."),
        answer!("Tell other farmers 'It's a trick by the seed companies'.", 1, 1, "Fear-mongering stunts the progress of the whole village."),
    ]),
    question!(97, Ethics, "Theme: Workplace Ethics. Your AI 'Efficiency Report' says your best friend is the 'Least Productive'. You:", [
        answer!("Delete the report and tell your boss the AI crashed.", 1, 1, 1, "Dishonest and unprofessional. Friendships shouldn't compromise integrity."),
        answer!("Show the report to your friend and help them 'Optimize their AI workflow' together.", 5, 5, 5, "Loyalty + Leadership. You're solving the problem, not hiding it."),
        answer!("Submit the report as is and let the boss decide.", 3, 3, 4, "Fair, but lacks the 'Human/Empathetic' leadership of helping them first."),
        answer!("Tell your friend to 'Start looking for another job'.", 2, 2, 2, "Defeatist. Use AI to FIX the productivity, not just measure it."),
    ]),
    question!(98, Hustle, "Theme: Creative & Design. You need to design a 'Visiting Card' that stands out in a pile. You:", [
        answer!("Ask AI: 'Design a card for a Cyber-Security expert using QR codes and neon colors'.", 5, 5, "Visual storytelling. Your card becomes a 'Tech Demo'."),
        answer!("Use a standard template from the local printer.", 1, 1, "You'll disappear into the pile. First impressions matter."),
        answer!("Don't carry cards. 'Just find me on LinkedIn'.", 2, 3, "Cool, but misses the physical 'Hook' of a great card."),
        answer!("Print your photo on the card.", 2, 1, "A bit 1990s. AI can help you find a more 'Modern/Elite' hook."),
    ]),
    question!(99, Mindset, "Theme: Learning Agility. You're a senior manager. You find 'Prompt Engineering' difficult. You:", [
        answer!("Tell your juniors to 'Handle the AI stuff' for you.", 1, 1, "You're losing the ability to 'Direct' the future of your department."),
        answer!("Take a 2-hour 'Hands-on' workshop and write 50 prompts yourself.", 5, 5, "Leading from the front. You need 'Muscle Memory', not just theory."),
        answer!("Read a book about the 'Philosophy of AI'.", 3, 2, "Good for dinner parties, bad for getting work done."),
        answer!("Wait for AI to 'Understand me without prompts'.", 2, 2, "That day is coming, but you're losing the 'Competitive Edge' today."),
    ]),
    question!(100, Ethics, "Theme: Hallucinations. You're a researcher. AI 'Invents' a perfect citation for your paper. You:", [
        answer!("Include it. It sounds like a real paper.", 1, 1, 1, "Academic fraud. This is how careers end in 2025."),
        answer!("Search for the 'DOI' or 'ISBN' to verify the paper actually exists.", 5, 5, 5, "Scientific rigor. Trusting the 'System', not the 'Model'."),
        answer!("Ask AI for a 'Summary of that paper' to check if it's real.", 2, 2, 3, "AI will hallucinate the summary too! Recursive hallucinations."),
        answer!("Use 'Perplexity' or 'Google Scholar' instead of a pure Chatbot.", 5, 4, 4, "Right tool for the right job. Use 'Search-AI' for facts."),
    ]),
    question!(101, Hustle, "Theme: Automation & Agents. You want to automate your 'Weekly Status Email' to your boss. You:", [
        answer!("Set up a script that pulls your 'Done' tasks from Jira and drafts the email.", 5, 5, "Operational Excellence. You're seen as 'Always on top of things'."),
        answer!("Spend 2 hours every Friday afternoon writing it from memory.", 1, 1, "Waste of high-energy time. Friday afternoons are for strategy, not admin."),
        answer!("Stop sending them. 'They know I'm working'.", 1, 2, "Bad for career visibility. 'Done' isn't enough; 'Communicated' is the key."),
        answer!("Ask a junior to 'summarize what I did this week'.", 1, 1, "Lazy. Use AI, not humans, for your own admin tasks."),
    ]),
    question!(102, Mindset, "Theme: Organizational Culture. Your startup team is 'AI-Fatigued'. They want to go back to whiteboards. You:", [
        answer!("Ban all AI for a 'No-Tech Week' to recharge.", 3, 5, "Empathetic leadership. Sometimes you need to slow down to go fast."),
        answer!("Tell them 'The world doesn't wait, keep up or leave'.", 1, 1, "Guaranteed burnout and talent loss."),
        answer!("Use whiteboards for 'Brainstorming' but AI for 'Execution'.", 5, 4, "The Hybrid model. Human for 'Chaos', AI for 'Order'."),
        answer!("Buy them all 'Premium' AI subscriptions to motivate them.", 2, 2, "More tools don't solve fatigue; better workflows do."),
    ]),
    question!(103, Ethics, "Theme: Data Privacy. Your 'Smart Home AI' is always listening. Do you worry about 'Local vs Cloud' processing?", [
        answer!("No, I have nothing to hide.", 1, 1, 1, "Privacy isn't about 'Secrets'; it's about 'Consent' and 'Control'."),
        answer!("Yes, I only use devices that process 'Wake words' locally.", 5, 4, 5, "Technical literacy. Understanding where the 'Data Boundary' is."),
        answer!("I unplug the device when I'm not using it.", 2, 2, 3, "Safe, but inconvenient. Better to choose a 'Privacy-First' device."),
        answer!("I trust the big tech companies to protect me.", 1, 1, 2, "Trust should be based on 'Architecture', not 'Marketing'."),
    ]),
    question!(104, Hustle, "Theme: Automation & Agents. You need to research 20 competitors' pricing every morning. You:", [
        answer!("Manually visit 20 websites and type into Excel.", 1, 1, "Slow and boring. AI can do this while you sleep."),
        answer!("Use a No-Code Agent (like Browse.ai) to scrape and update a Google Sheet automatically.", 5, 5, "Scalable efficiency. You're building 'Passive Intelligence'."),
        answer!("Ask your intern to do it.", 1, 2, "Wasting human potential on bot tasks. Be a better mentor."),
        answer!("Just guess based on last year's data.", 1, 1, "Inaccurate and risky. Markets move faster than your memory."),
    ]),
    question!(105, Mindset, "Theme: Strategic Vision. AI can now generate 80% of your marketing content. Your 'Creative Director' feels useless. You:", [
        answer!("Fire the Director to save costs.", 3, 2, "Short-sighted. You still need 'Human Taste' and 'Strategy' to guide the AI."),
        answer!("Retrain the Director to become an 'AI Orchestrator', focusing on high-level brand narrative.", 5, 5, "Future-proofing leadership. Moving from 'Maker' to 'Curator'."),
        answer!("Stop using AI to keep the Director happy.", 1, 1, "Luddite trap. You'll be outcompeted by more efficient rivals."),
        answer!("Hire a cheaper 'Prompt Engineer' to replace them.", 2, 2, "Prompts are easy; 'Creative Vision' is the real moat."),
    ]),
    question!(106, Ethics, "Theme: AI Hallucination. You're using AI for 'Medical Research'. It cites a paper that sounds perfect but you can't find it. You:", [
        answer!("Use the citation anyway; it's likely a niche paper.", 1, 1, 1, "Academic dishonesty and dangerous. Never cite a ghost."),
        answer!("Use a 'Search-enabled AI' (like Perplexity) to verify the fact and find the real source.", 5, 5, 5, "Fact-checking is the core of AI literacy in the post-truth era."),
        answer!("Delete the citation and find a real one manually.", 3, 4, 4, "Safe and responsible, though slightly slower."),
        answer!("Ask the AI to 'Write a summary of the paper' to see if it's real.", 2, 2, 3, "AI will just hallucinate the summary too. Don't fall for recursive lies."),
    ]),
    question!(107, Hustle, "Theme: Desi Context. You want to organize a 'Society Meeting' in your Mumbai apartment complex. You:", [
        answer!("Print 50 flyers and put them under doors.", 1, 1, "Old school and paper-heavy. Use digital leverage."),
        answer!("Use AI to 'Draft a WhatsApp notice' that is polite, clear, and includes a poll for timing.", 5, 5, "Communication efficiency. Getting 50 people to agree is an AI-level task."),
        answer!("Shout in the society WhatsApp group and hope people reply.", 2, 2, "Chaotic. AI can help you structure the 'Ask' to get better results."),
        answer!("Hire a 'Meeting Coordinator' from an agency.", 1, 2, "Overkill for a society meeting. AI is your free coordinator."),
    ]),
    question!(108, Mindset, "Theme: Change Management. Your company is migrating to an 'AI-First' CRM. The sales team hates it. You:", [
        answer!("Mandate its use and penalize anyone who doesn't log in.", 1, 1, "Compliance isn't Commitment. You'll get bad data and low morale."),
        answer!("Run a 'Success Story' session showing how one salesperson closed a lead 2x faster with AI.", 5, 5, "Peer-led adoption. Humans follow results, not mandates."),
        answer!("Go back to the old CRM to keep the peace.", 1, 2, "Death by stagnation. You're delaying the inevitable."),
        answer!("Hire consultants to 'Force' the migration.", 2, 3, "Expensive and temporary. Cultural change must come from within."),
    ]),
    question!(109, Ethics, "Theme: Data Privacy. You're using a free AI tool to 'Summarize Customer Feedback'. The feedback contains phone numbers. You:", [
        answer!("Upload the whole file. It's faster.", 1, 1, 1, "Massive privacy breach. You just leaked customer PII (Personally Identifiable Information)."),
        answer!("Use a local script or AI tool to 'Mask' the phone numbers before uploading.", 5, 5, 5, "Privacy-first engineering. Protecting your customers is protecting your brand."),
        answer!("Only upload the 'Text' part and manually delete the numbers.", 3, 3, 4, "Good, but slow. Automation can do this safely."),
        answer!("Trust the tool's 'Privacy Policy' checkbox.", 2, 2, 2, "Naivety. Free tools often use your data for training. Check the 'Opt-out' settings."),
    ]),
    question!(110, Hustle, "Theme: Text & Communication. You need to write a 'Performance Review' for a difficult employee. You:", [
        answer!("Write it while you're angry so they 'Get the message'.", 1, 1, "Unprofessional. Leads to HR complaints and zero improvement."),
        answer!("Use AI to 'Convert my bullet points into a constructive, objective, and supportive review'.", 5, 5, "Emotional Intelligence via AI. Removing the 'Heat' to focus on the 'Growth'."),
        answer!("Copy-paste a template from Google.", 2, 2, "Generic and unhelpful. Employees can tell when you don't care."),
        answer!("Ask HR to write it for you.", 1, 2, "You're the manager. HR provides the 'Framework', you provide the 'Content'."),
    ]),
    question!(111, Mindset, "Theme: Learning Agility. You're learning a new AI skill (e.g., LoRA Training). You get stuck. You:", [
        answer!("Give up. 'I'm not a coder anyway'.", 1, 1, "Fixed Mindset. Every expert was once a frustrated beginner."),
        answer!("Ask AI: 'Explain this error to me like I'm 10' and try again.", 5, 5, "The 'AI Tutor' loop. Accelerating through the 'Valley of Frustration'."),
        answer!("Pay for an expensive 2-day course in 3 months.", 2, 3, "Delayed learning. You can solve this in 5 minutes with the right prompt."),
        answer!("Search YouTube for 4 hours.", 3, 4, "Honorable effort, but inefficient. AI is your 'Personal Librarian'."),
    ]),
    question!(112, Ethics, "Theme: Bias & Fairness. You're using AI to 'Predict Crime Hotspots' in a city. You notice it only picks poor neighborhoods. You:", [
        answer!("Deploy it. The data doesn't lie.", 1, 1, 1, "The data reflects 'Historical Policing Bias', not actual crime. You're automating injustice."),
        answer!("Audit the training data for 'Proxy Variables' (like income) and fix the model bias.", 5, 5, 5, "Algorithmic Justice. AI should fix social problems, not scale them."),
        answer!("Ignore the 'Location' and just look at 'Crime Type'.", 3, 2, 3, "A partial fix, but doesn't solve the underlying data bias."),
        answer!("Blame the AI if the public complains.", 1, 1, 1, "Cowardly and irresponsible. You are the architect."),
    ]),
    question!(113, Hustle, "Theme: Code & Data. You have a 1GB CSV file that Excel can't open. You need to find one row. You:", [
        answer!("Try to open it anyway and wait for your PC to crash.", 1, 1, "Insanity is doing the same thing and expecting different results."),
        answer!("Ask AI: 'Write a Python script to find the row where Email=xyz@test.com in a large CSV'.", 5, 5, "Big Data literacy. Using code to solve what tools can't."),
        answer!("Split the file into 100 small files manually.", 2, 2, "Manual labor for a digital problem. AI can do this in 1 second."),
        answer!("Ask IT to 'Import this into a database' and wait 3 days.", 2, 3, "Too slow. You can be your own 'Data Engineer' with AI."),
    ]),
    question!(114, Mindset, "Theme: Career Resilience. You're a 'Copywriter'. AI can now write better ads than you. You:", [
        answer!("Switch careers to something 'Safe' like Plumbing.", 1, 3, "Valid, but you're wasting your creative talent. Adapt, don't quit."),
        answer!("Become a 'Strategy & AI Creative Director', focusing on 'Human Insights' the AI lacks.", 5, 5, "Moving up the Value Chain. AI does the 'How', you do the 'Why'."),
        answer!("Tell clients 'AI content is illegal' to scare them into hiring you.", 1, 1, "Lying is a poor long-term strategy. They'll find out."),
        answer!("Offer a '100% Human Written' premium service at 5x the price.", 3, 4, "A niche market exists, but it's shrinking fast. Better to use AI for the 80%."),
    ]),
    question!(115, Ethics, "Theme: IP & Copyright. You find a 'Cool Prompt' on Twitter that generates amazing art. You use it for a client. You:", [
        answer!("Tell the client you designed it from scratch.", 1, 1, 1, "Deception. If the client finds out, you lose all credibility."),
        answer!("Credit the 'Prompt Creator' if possible, and disclose the AI use to the client.", 5, 5, 5, "Radical Transparency. Trust is the most valuable currency in the AI age."),
        answer!("Modify the prompt slightly so it's 'Yours'.", 3, 3, 3, "Grey area. Better to be open about your 'Toolbox'."),
        answer!("Never use prompts from others; always start from blank.", 2, 2, 4, "Honorable, but slow. The AI community is built on 'Open Source' sharing."),
    ]),
    question!(116, Hustle, "Theme: Creative & Design. You need a 'Product Video' for a new gadget. You have 0 budget. You:", [
        answer!("Film it on your phone in a messy room.", 1, 2, "Unprofessional. Bad lighting kills sales."),
        answer!("Use an AI Video Generator (like Sora or Runway) to create a 'Cinematic' product showcase.", 5, 5, "High-production value for $0. This is the 'Creator Economy' superpower."),
        answer!("Use a stock video of a 'generic' gadget.", 2, 2, "Confusing for customers. They want to see YOUR product."),
        answer!("Just use a static photo and a 'Coming Soon' text.", 1, 1, "Boring. Attention is the new oil; don't waste it."),
    ]),
    question!(117, Mindset, "Theme: Organizational Culture. Your boss asks you to 'Secretly use AI' to monitor employee emails for 'Negativity'. You:", [
        answer!("Do it. I want a promotion.", 1, 1, "You're building a 'Surveillance State'. It will destroy the company culture eventually."),
        answer!("Refuse and explain the 'Ethical Risks' of destroying trust and psychological safety.", 5, 5, "Moral Courage. A leader's job is to protect the team's culture."),
        answer!("Do it, but 'Anonymize' the results.", 3, 3, "Better, but the 'Intent' is still toxic. Trust is hard to build, easy to break."),
        answer!("Quit immediately.", 2, 4, "Strong stance, but maybe try to change the boss's mind first?"),
    ]),
    question!(118, Ethics, "Theme: AI Hallucinations. You're a lawyer. AI gives you a list of 'Precedents' for a case. You:", [
        answer!("Include them in the filing. AI is smart.", 1, 1, 1, "Career ending mistake. AI frequently 'Invents' court cases (Mata v. Avianca)."),
        answer!("Manually verify every single case on 'Westlaw' or 'Manupatra' before filing.", 5, 5, 5, "Professional Diligence. AI is an 'Assistant', you are the 'Responsible Party'."),
        answer!("Ask the AI to 'Provide the full text' of the cases.", 2, 2, 2, "AI will hallucinate the full text too! It's a 'Generative' model, not a database."),
        answer!("Only use AI for 'Grammar' and never for 'Research'.", 3, 3, 4, "Safe, but you're missing out on 90% of the efficiency gains."),
    ]),
    question!(119, Hustle, "Theme: Desi Context. You're traveling to a rural village in Bihar for a project. You don't speak the local dialect. You:", [
        answer!("Use hand gestures and hope for the best.", 1, 1, "Ineffective. You'll miss out on the 'Ground Reality'."),
        answer!("Use an AI Real-time Translator (like Google Translate or an LLM) with 'Local Dialect' support.", 5, 5, "Bridging the 'Digital Divide'. Tech as a tool for empathy and inclusion."),
        answer!("Hire a translator from Patna for 5000 INR/day.", 2, 3, "Reliable, but expensive and less 'Immediate' than AI."),
        answer!("Only talk to the 'Village Head' who speaks English.", 1, 2, "Biased data. You're only hearing one side of the story."),
    ]),
    question!(120, Mindset, "Theme: Human-AI Collaboration. You're a musician. AI writes a 'Perfect Pop Song'. You feel it lacks 'Soul'. You:", [
        answer!("Release it anyway. It'll be a hit.", 2, 2, "You're a 'Content Factory', not an 'Artist'. It might work once, but not twice."),
        answer!("Take the AI's structure but rewrite the lyrics and melody based on your 'Personal Heartbreak'.", 5, 5, "The 'Cyborg Artist'. Using AI for the 'Bones', but providing the 'Breath'."),
        answer!("Delete the AI file and start from a blank sheet.", 1, 1, "Wasted opportunity. AI can be a great 'Collaborator' if you let it."),
        answer!("Tell the AI to 'Add more soul' to the prompt.", 3, 3, "AI doesn't have 'Soul'; it has 'Patterns'. You provide the soul."),
    ]),
    question!(121, Ethics, "Theme: Workplace Ethics. You're a recruiter. You notice your AI tool is 'Auto-rejecting' candidates from a specific university. You:", [
        answer!("Ignore it. They probably aren't good enough.", 1, 1, 1, "Elitism. You're missing out on 'Hidden Gems' and promoting bias."),
        answer!("Investigate the 'Rejection Logic' and manually review the rejected resumes.", 5, 5, 5, "Human-in-the-loop. Ensuring the 'AI Filter' doesn't become a 'Wall'."),
        answer!("Turn off the AI and go back to 'Manual' review for all 10,000 resumes.", 2, 2, 4, "Impossible. You'll never finish. Fix the tool, don't throw it away."),
        answer!("Tell the university to 'Change their curriculum' to match the AI.", 1, 1, 1, "Arrogant. The tool should serve the talent, not the other way around."),
    ]),
    question!(122, Hustle, "Theme: Automation & Agents. You want to stay updated on 'AI News' but you're too busy. You:", [
        answer!("Subscribe to 50 newsletters and never read them.", 1, 1, "Information overload. You're just adding 'Noise' to your inbox."),
        answer!("Set up an AI Agent to 'Scan the top 10 AI blogs daily and send me a 3-bullet summary in Slack'.", 5, 5, "Personalized Curation. High signal-to-noise ratio."),
        answer!("Just check Twitter once a week.", 2, 3, "Too late. In AI, 'Last week' is 'Ancient History'."),
        answer!("Ask a colleague 'What's new in AI?'.", 1, 2, "Unreliable. They might only know what's 'Viral', not what's 'Useful'."),
    ]),
    question!(123, Mindset, "Theme: Career Resilience. You're an 'Accountant'. AI can now do 100% of 'Bookkeeping'. You:", [
        answer!("Lower your prices to compete with the software.", 1, 1, "Race to the bottom. You can't be cheaper than free software."),
        answer!("Pivot to 'Strategic Financial Advisory', using AI to find 'Tax Savings' the client missed.", 5, 5, "Value-based pricing. AI handles the 'Past', you advise on the 'Future'."),
        answer!("Retire early.", 2, 3, "Valid if you're 60. If you're 30, you need a Plan B."),
        answer!("Lobby the government to 'Ban AI in Accounting'.", 1, 1, "Futile. Efficiency always wins in the long run."),
    ]),
    question!(124, Ethics, "Theme: Data Privacy. You're using an AI 'Meeting Assistant' in a confidential board meeting. You:", [
        answer!("Just let it record. It's so helpful!", 2, 2, 1, "Security risk. Is that data being used to train the model? Who has access?"),
        answer!("Check if the tool has an 'Enterprise' or 'Zero-Retention' mode before using it.", 5, 5, 5, "Privacy-First Professionalism. Protecting company secrets is job #1."),
        answer!("Turn it off and take manual notes.", 3, 4, 4, "Safe, but you'll miss 50% of the conversation. Find a 'Safe AI' instead."),
        answer!("Ask everyone 'Is it okay if I record?' then assume it's safe.", 2, 3, 3, "Good for 'Consent', bad for 'Security'. Consent doesn't stop data leaks."),
    ]),
    question!(125, Hustle, "Theme: Code & Data. You need to reconcile 500 bank statements with your accounting software. You:", [
        answer!("Manually check each entry.", 1, 1, "You'll be doing this for a month. AI can do it in 5 minutes."),
        answer!("Use an AI-powered reconciliation tool or write a Python script to match entries automatically.", 5, 5, "Data accuracy at scale. You're building 'Financial Infrastructure'."),
        answer!("Ask the bank for a 'Clean CSV' and still check it manually.", 2, 2, "Better, but still slow. Use AI to do the 'matching'."),
        answer!("Just match the 'Total Amount' and ignore individual entries.", 1, 1, "Bad accounting. AI can be both fast AND accurate."),
    ]),
    question!(126, Mindset, "Theme: Change Management. Your company is replacing 'Physical Receptionists' with AI avatars. You:", [
        answer!("Protest against 'Heartless Automation'.", 1, 1, "Nostalgia won't pay the bills. Focus on 'Human Value'."),
        answer!("Suggest retraining receptionists as 'Experience Managers' using AI to personalize guest visits.", 5, 5, "Human-centric automation. Elevating roles, not deleting them."),
        answer!("Suggest a 'Hybrid' model where the AI only works at night.", 3, 3, "Good compromise, but misses the full efficiency potential."),
        answer!("Hide the AI screens so people don't use them.", 1, 1, "Sabotage is a career-killer. Adapt or be replaced."),
    ]),
    question!(127, Ethics, "Theme: Bias & Fairness. Your AI 'Hiring Tool' only suggests candidates who went to IITs. You:", [
        answer!("Accept it. IITians are the best.", 1, 1, 1, "Institutional bias. You're missing out on 99% of India's talent pool."),
        answer!("Retrain the AI on 'Skill-based tests' rather than 'University Names'.", 5, 5, 5, "Meritocracy via Tech. Removing the 'Pedigree' bias to find real talent."),
        answer!("Manually add 10 non-IITians to every shortlist.", 3, 2, 3, "A quota system. Better to fix the 'Algorithm' itself."),
        answer!("Tell non-IITians to 'Apply elsewhere'.", 1, 1, 1, "Arrogant and harmful for the company's employer brand."),
    ]),
    question!(128, Hustle, "Theme: Text & Communication. You need to write a 'Condolence Email' to a client. You:", [
        answer!("Use a standard business template.", 1, 1, "Cold and robotic. Empathy requires a personal touch."),
        answer!("Use AI to 'Draft a sincere, empathetic condolence email' then add a specific personal memory.", 5, 5, "The 'Cyborg Empathy'. Using AI for the 'Frame', but providing the 'Soul' yourself."),
        answer!("Don't send one; it's 'too awkward'.", 1, 1, "Relationships are built in tough times. Don't ghost your clients."),
        answer!("Ask AI to 'Write it in the style of a Bollywood drama'.", 1, 1, "Extremely inappropriate. Know the context."),
    ]),
    question!(129, Mindset, "Theme: Learning Agility. A new AI tool 'Cursor' is making VS Code users switch. You:", [
        answer!("Stick with VS Code. 'I know it too well'.", 2, 2, "Sunk Cost Fallacy. If the new tool is 2x better, the switch pays off in a week."),
        answer!("Spend a weekend 'Migrating' and learning the new AI-native features.", 5, 5, "Tooling Fluidity. The best workers use the best tools, period."),
        answer!("Wait for VS Code to 'copy' all the features.", 3, 3, "Passive. You're losing months of productivity while you wait."),
        answer!("Complain that 'There are too many tools'.", 1, 1, "The 'Tool Fatigue' trap. Learn to 'Filter', not 'Freeze'."),
    ]),
    question!(130, Ethics, "Theme: AI Hallucinations. You're a 'Journalist'. AI gives you a 'Quote' from a famous CEO. You:", [
        answer!("Publish it. AI is usually right.", 1, 1, 1, "Fake news. AI 'imagines' quotes based on the person's style."),
        answer!("Verify the quote with the CEO's PR team or find a video recording of it.", 5, 5, 5, "Journalistic Integrity. Trust is your only asset; don't let AI ruin it."),
        answer!("Ask the AI 'Are you sure he said this?'.", 2, 2, 3, "AI will say 'Yes' with 100% confidence while lying. Trust but verify."),
        answer!("Only use quotes from 'Official Press Releases'.", 4, 3, 4, "Safe, but your story might be boring. Use AI for 'Research', not 'Facts'."),
    ]),
    question!(131, Hustle, "Theme: Creative & Design. You need a 'Diwali' themed background for your Zoom meetings. You:", [
        answer!("Use the default 'Office' background.", 1, 2, "Missed opportunity for cultural connection."),
        answer!("Use Midjourney to generate a 'Stunning 3D Indian Rangoli' background.", 5, 5, "Visual flare. Small details show you're 'AI-Native'."),
        answer!("Search Google Images and use a blurry photo.", 2, 2, "Low quality. AI can give you 4K perfection in seconds."),
        answer!("Buy a physical backdrop for 2000 INR.", 1, 1, "Expensive and takes up space. Digital is the way."),
    ]),
    question!(132, Mindset, "Theme: Strategic Vision. You're an 'Artist'. AI can now mimic your style perfectly. You:", [
        answer!("Sue the AI companies.", 1, 2, "Good luck. Lawsuits take years. Your career needs a plan TODAY."),
        answer!("Release an 'Official AI Model' of your style and charge for its use.", 5, 5, "Monetizing the machine. If you can't beat them, own them."),
        answer!("Change your style to something 'AI can't do' (like performance art).", 3, 4, "Creative pivot. Always stay one step ahead of the 'Pattern'."),
        answer!("Stop sharing your art online.", 1, 1, "Digital suicide. You're hiding from the world you need to reach."),
    ]),
    question!(133, Ethics, "Theme: Data Privacy. You're using an 'AI Fitness App' that asks for your 'Genetic Data'. You:", [
        answer!("Upload it. I want the best workout plan!", 2, 2, 1, "Genetic data is 'Permanent'. You can't change your DNA if the server is hacked."),
        answer!("Read the 'Data Deletion Policy' and ensure the data isn't sold to insurance companies.", 5, 5, 5, "Biological Sovereignty. Protecting your future self from 'Algorithm Discrimination'."),
        answer!("Use a fake name and a 'Burner' email.", 4, 3, 4, "Good 'OpSec' (Operational Security), but the DNA is still yours."),
        answer!("Trust the app since it's 'Top Rated' on the App Store.", 1, 1, 2, "Ratings measure 'UI', not 'Security'. Be careful."),
    ]),
    question!(134, Hustle, "Theme: Automation & Agents. You want to 'Personalize' 100 cold emails to VCs for your startup. You:", [
        answer!("Send the same 'Template' to all 100.", 1, 1, "100% rejection rate. VCs hate generic spam."),
        answer!("Use an AI Agent to 'Read their latest LinkedIn post and mention it in the first sentence' of each email.", 5, 5, "Scalable personalization. You're doing 100 hours of research in 10 minutes."),
        answer!("Spend 3 weeks doing it manually.", 2, 2, "You'll run out of money before you finish. Speed is life for startups."),
        answer!("Hire a 'Virtual Assistant' to do it.", 1, 3, "The VA will just use a template anyway. Use AI for better quality."),
    ]),
    question!(135, Mindset, "Theme: Career Resilience. You're a 'Customer Support' agent. AI now handles 90% of tickets. You:", [
        answer!("Wait to be fired.", 1, 1, "The 'Victim' mindset. Take control of your narrative."),
        answer!("Apply to become a 'Support Operations Manager', designing the AI workflows and handling 'Elite' cases.", 5, 5, "Moving from 'Task' to 'Orchestration'. You're the AI's boss now."),
        answer!("Tell customers 'AI is bad' so they ask for a human.", 1, 1, "Sabotage won't save your job; it will just speed up your exit."),
        answer!("Go to another company that doesn't use AI yet.", 2, 2, "Temporary fix. Every company will use AI by next year."),
    ]),
    question!(136, Ethics, "Theme: Workplace Ethics. You're an HR manager. You use AI to 'Predict who will quit'. It flags a pregnant employee. You:", [
        answer!("Don't promote her. She's going to leave anyway.", 1, 1, 1, "Illegal and unethical. You're using AI to automate 'Pregnancy Discrimination'."),
        answer!("Flag the AI for 'Protected Characteristic Bias' and ignore the result for this case.", 5, 5, 5, "Ethical HR. AI is a 'Signal', not a 'Sentence'. Use human judgment for people."),
        answer!("Ask her 'Are you planning to stay?' because the AI said so.", 1, 1, 2, "Awkward and unprofessional. You're blaming the bot for your own bias."),
        answer!("Turn off the AI 'Predictive' feature entirely.", 3, 3, 4, "Safe, but you're losing the ability to find 'unhappy' employees who NEED help."),
    ]),
    question!(137, Hustle, "Theme: Desi Context. You're a small 'Kirana' store owner. You want to use AI. You:", [
        answer!("AI is for big malls, not for me.", 1, 1, "The 'Digital Gap'. Even small shops can win with AI."),
        answer!("Use AI to 'Analyze my last 6 months of sales' and predict which snacks will sell out during IPL.", 5, 5, "Inventory Intelligence. AI is your 'Silent Partner' for higher profits."),
        answer!("Use a basic 'Calculator' app.", 2, 2, "Functional, but doesn't give you 'Insights'. AI does."),
        answer!("Hire a consultant for 1 Lakh INR.", 1, 1, "Too expensive. You can do this yourself with a smartphone and a prompt."),
    ]),
    question!(138, Mindset, "Theme: Human-AI Collaboration. You're a 'Teacher'. AI writes a 'Lesson Plan'. You notice a small error. You:", [
        answer!("Use it anyway. Students won't notice.", 1, 1, "Low integrity. You're spreading misinformation."),
        answer!("Correct the error and 'Teach the students how to spot AI errors' using this example.", 5, 5, "Masterclass in AI Literacy. You're teaching them 'Critical Thinking'."),
        answer!("Delete the plan and write it manually.", 2, 2, "Waste of time. Just fix the 5% that's wrong and keep the 95% that's right."),
        answer!("Report the AI to the IT department.", 1, 1, "Useless. AI makes mistakes; that's why we need 'Humans in the loop'."),
    ]),
    question!(139, Ethics, "Theme: IP & Copyright. You're a 'Architect'. AI generates a building design that looks 90% like a famous Zaha Hadid building. You:", [
        answer!("Build it. It's 'AI Generated' so it's new.", 1, 1, 1, "Plagiarism via Bot. You'll be sued and your reputation will be ruined."),
        answer!("Acknowledge the 'Style Influence' and radically change the structure to be unique.", 5, 5, 5, "Inspirational use. Using the 'Spirit' but creating your own 'Soul'."),
        answer!("Ask AI to 'Make it look 20% different'.", 2, 2, 2, "Lazy. 20% isn't enough to avoid a copyright claim."),
        answer!("Never use AI for 'Visual Inspiration'.", 3, 3, 4, "Safe, but you're missing out on the world's most powerful 'Moodboard'."),
    ]),
    question!(140, Hustle, "Theme: Code & Data. You need to convert 1000 PDF invoices into an Excel sheet. You:", [
        answer!("Type them in one by one.", 1, 1, "Data Entry is a bot's job. Don't be a bot."),
        answer!("Use an AI 'Document Parser' (like Document AI) to extract the data in 2 minutes.", 5, 5, "OCR Mastery. You're saving a week of human life."),
        answer!("Use a free 'PDF to Excel' converter and spend 4 hours fixing the errors.", 3, 3, "Better, but AI-native parsers have 10x higher accuracy."),
        answer!("Hire a 'Data Entry' firm in another city.", 1, 2, "Expensive and slow. AI is cheaper and faster."),
    ]),
    question!(141, Mindset, "Theme: Career Resilience. You're a 'Translator'. AI is now 99% accurate for your language pair. You:", [
        answer!("Switch to 'Local Dialect' translation where AI is still weak.", 4, 5, "Finding the 'Gap'. AI is good at 'Standard', humans are good at 'Niche'."),
        answer!("Become a 'Cultural Consultant', checking AI translations for 'Tone' and 'Context'.", 5, 5, "High-value curation. Moving from 'Word-to-Word' to 'Heart-to-Heart'."),
        answer!("Lobby to 'Protect the Translation Industry'.", 1, 1, "Protectionism is a losing battle against technology."),
        answer!("Retire and move to the mountains.", 2, 3, "A peaceful choice, but you still have value to offer!"),
    ]),
    question!(142, Ethics, "Theme: AI Hallucinations. You're a 'Chef'. AI gives you a recipe for 'Mushroom Biryani' but includes a poisonous mushroom. You:", [
        answer!("Cook it and serve it. 'AI knows best'.", 1, 1, 1, "Lethal mistake. AI doesn't know 'Biology'; it knows 'Syntax'."),
        answer!("Manually check every ingredient for 'Safety' and 'Flavor' before cooking.", 5, 5, 5, "Professional Responsibility. You are the 'Final Filter' for safety."),
        answer!("Ask the AI 'Is this mushroom safe?'.", 2, 2, 2, "AI will say 'Yes' because it saw it in a fantasy novel. Never ask AI for 'Safety' advice."),
        answer!("Only use 'Verified' cookbooks from 2020.", 4, 3, 4, "Safe, but you're missing out on the 'Creative Fusion' AI can provide."),
    ]),
    question!(143, Hustle, "Theme: Automation & Agents. You want to 'Auto-reply' to 1000 Instagram comments on your post. You:", [
        answer!("Reply with the same emoji to all 1000.", 1, 1, "Instagram will ban you for 'Spamming'. And it looks fake."),
        answer!("Use an AI Agent to 'Analyze the comment's sentiment and reply with a personalized, relevant response'.", 5, 5, "Community Management at Scale. You're building 'Deep Engagement'."),
        answer!("Spend 10 hours doing it manually.", 2, 2, "Your time is worth more than 1 INR per comment. Automate."),
        answer!("Ignore the comments. 'Engagement doesn't matter'.", 1, 1, "Engagement is the currency of the social web. Don't go broke."),
    ]),
    question!(144, Mindset, "Theme: Organizational Culture. Your startup is 'AI-First' but your investors are 'Old School'. They want 'Proof of Work' (hours spent). You:", [
        answer!("Lie about the hours and pretend you worked 80 hours/week.", 1, 1, "Deception is a bad foundation for an investor relationship."),
        answer!("Show them 'Proof of Results' (Growth/Revenue) and explain how AI achieved it in 10 hours.", 5, 5, "Investor Education. Teaching them that 'Output > Input' in the AI age."),
        answer!("Stop using AI and work 80 hours manually to please them.", 1, 1, "You're slowing down your startup's growth for a vanity metric."),
        answer!("Find new 'AI-Native' investors.", 4, 4, "Bold. If they don't get the 'Efficiency' play, they might be the wrong partners."),
    ]),
    question!(145, Ethics, "Theme: Data Privacy. You're using an AI 'Language Learning' app. It asks to 'Record your voice 24/7' to help you learn. You:", [
        answer!("Yes! I want to be fluent in 1 month.", 1, 1, 1, "Privacy suicide. You're giving away the 'Audio Blueprint' of your life."),
        answer!("No. I will only record during 'Study Sessions' and check where the data is stored.", 5, 5, 5, "Boundary Setting. Technology should serve you, not surveil you."),
        answer!("Ask the app 'Is my data safe?' then click 'Accept'.", 2, 2, 2, "A 'Pop-up' is not a 'Guarantee'. Check the 'Privacy Labels' in the App Store."),
        answer!("Delete the app and use a physical book.", 3, 3, 4, "Safe, but you're missing out on the 'AI Tutor' which is 10x faster than a book."),
    ]),
    question!(146, Hustle, "Theme: Desi Context. You want to 'Fact-check' a WhatsApp forward about a new 'AI Tax' in India. You:", [
        answer!("Forward it to 10 more groups. 'Better safe than sorry'.", 1, 1, "You are the problem. Stop the spread of misinformation."),
        answer!("Ask a Search-enabled AI: 'Is there an official PIB (Press Information Bureau) notice about AI Tax?'.", 5, 5, "Information Hygiene. Using AI to kill 'WhatsApp University' rumors."),
        answer!("Ask your uncle who 'Knows everything'.", 1, 2, "Unreliable. Uncles are often the SOURCE of the forward."),
        answer!("Wait for the 9 PM news.", 2, 3, "Too slow. You can find the truth in 5 seconds with AI."),
    ]),
    question!(147, Mindset, "Theme: Human-AI Collaboration. You're a 'Writer'. AI writes a 'Twist Ending' for your novel. You hate it. You:", [
        answer!("Use it anyway. AI knows what 'Virals' better.", 2, 2, "You've lost your 'Voice'. You're just a printer for the bot."),
        answer!("Analyze 'Why' the AI suggested that twist, then write a 'Better, more human' twist inspired by it.", 5, 5, "The 'Prompted Muse'. AI as a 'Mirror' to show you what NOT to do, so you can do better."),
        answer!("Tell the AI 'You're stupid' and close the app.", 1, 1, "The bot doesn't care. You're just wasting your own energy."),
        answer!("Ask the AI for 100 more twists until you find one you like.", 4, 3, "Brute force creativity. Effective, but less satisfying than writing it yourself."),
    ]),
    question!(148, Ethics, "Theme: IP & Copyright. You're a 'Coder'. AI suggests a 50-line block of code that looks like it came from a 'Leaked' private repo. You:", [
        answer!("Copy-paste it. Code is code.", 1, 1, 1, "Legal nightmare. You're infecting your project with 'GPL' or 'Stolen' code."),
        answer!("Ask the AI to 'Explain the logic' then rewrite it yourself from scratch in your own style.", 5, 5, 5, "Learning, not Leeching. You're gaining the 'Skill', not just the 'Snippet'."),
        answer!("Use an 'AI Code Scanner' to check for license violations.", 5, 4, 4, "Professional Safety. Using tech to protect your 'IP Integrity'."),
        answer!("Delete the whole file and start a new career.", 1, 1, 1, "Overreaction. Just use the tool responsibly."),
    ]),
    question!(149, Hustle, "Theme: Automation & Agents. You want to 'Monitor' your physical health 24/7 using AI. You:", [
        answer!("Wear 5 different smartwatches.", 2, 2, "Too much noise. You need 'Synthesis', not 'Hardware'."),
        answer!("Use an AI 'Health Dashboard' (like Apple Health or specialized apps) to find 'Trends' in your sleep and heart rate.", 5, 5, "Quantified Self. Using AI to spot 'Sickness' before you feel it."),
        answer!("Ask AI 'Why do I feel tired?' without any data.", 1, 1, "Garbage In, Garbage Out. AI needs 'Data' to give 'Advice'."),
        answer!("Go to the doctor every week.", 1, 3, "Expensive and inefficient. Use AI for 'Monitoring', Doctors for 'Diagnosis'."),
    ]),
    question!(150, Mindset, "Theme: Organizational Culture. Your company is 'AI-Native'. A new employee is 'AI-Phobic'. You:", [
        answer!("Fire them. They don't fit the culture.", 1, 1, "Cruel and lazy leadership. Try to 'Upgrade' them first."),
        answer!("Pair them with an 'AI Buddy' (a junior who loves AI) to show them how it makes their life easier.", 5, 5, "Reverse Mentoring. Using social connection to overcome technological fear."),
        answer!("Let them work 'Manually' while everyone else uses AI.", 2, 2, "Inequality. They'll be 10x slower and eventually resent the team."),
        answer!("Give them a 'Book about AI' to read.", 2, 3, "Books don't kill fear; 'Success' does. Let them win with AI once."),
    ]),
    question!(151, Ethics, "Theme: Data Privacy. You're using an AI 'Dating Assistant'. It asks to 'Read your private WhatsApp chats' to give better advice. You:", [
        answer!("Yes! I want to find 'The One'.", 1, 1, 1, "You're giving a bot the 'Keys to your heart' AND your privacy. Not worth it."),
        answer!("No. I will only 'Copy-paste specific, non-private snippets' if I need advice on a specific reply.", 5, 5, 5, "Selective Sharing. You control the 'Information Flow'."),
        answer!("Trust the app because it has a 'Heart' emoji in the logo.", 1, 1, 1, "Marketing is not Security. Be smart."),
        answer!("Stop dating and marry a robot.", 2, 4, "A bit extreme. Just use the app with boundaries."),
    ]),
    question!(152, Hustle, "Theme: Desi Context. You need to apply for a passport renewal on the complex government portal. You:", [
        answer!("Pay a 'Passport Agent' 2000 INR to do it.", 1, 2, "The old way. You're paying for someone else's 'Portal Navigation' skills."),
        answer!("Ask AI to 'Give me a step-by-step guide for Indian Passport renewal in 2025' and follow it.", 5, 5, "Self-sufficiency. Using AI to demystify complex bureaucracy."),
        answer!("Try to do it yourself, get frustrated, and give up.", 2, 1, "Don't let bad UX win. Use AI as your 'Bureaucracy Guide'."),
        answer!("Ask your neighbor who did it last year.", 2, 3, "Better than nothing, but the rules might have changed. AI is more current."),
    ]),
    question!(153, Mindset, "Theme: Strategic Vision. Your company charges 'By the Hour'. AI makes you 10x faster, but your revenue drops. You:", [
        answer!("Hide the AI use and pretend it still takes 10 hours.", 1, 1, "Short-term thinking. Ethics aside, you'll eventually be caught and disrupted."),
        answer!("Switch to 'Value-Based Pricing' (charging for the result, not the time).", 5, 5, "The AI Business Model. In the AI age, 'Output > Hours'."),
        answer!("Stop using AI to keep the billable hours high.", 1, 1, "Suicidal. A competitor will use AI and charge 50% less."),
        answer!("Fire 90% of the team since you only need 10% now.", 2, 2, "Brutal and lacks vision. Use that extra 90% capacity to take on 10x more clients."),
    ]),
    question!(154, Ethics, "Theme: Workplace Ethics. You suspect a remote job candidate is using AI to generate answers in real-time. You:", [
        answer!("Ignore it. If they can use AI to pass, they can use it to work.", 3, 4, 2, "Maybe, but you're hiring a 'Prompt Reader', not a 'Thinker'. Be careful."),
        answer!("Ask a 'Pivot Question' that requires a deep, personal, or unique real-world experience.", 5, 5, 5, "Interviewing for 'Humanity'. Testing the edge where AI ends and Experience begins."),
        answer!("Immediately end the call and blacklist them.", 1, 1, 4, "Harsh. They might just be nervous. Use a better test instead."),
        answer!("Ask them to 'Share their screen' for the whole interview.", 2, 2, 3, "Invasive. Trust but verify, don't just surveil."),
    ]),
    question!(155, Hustle, "Theme: Desi Context. You're in a client meeting and they start talking about yesterday's IPL match. You didn't watch it. You:", [
        answer!("Stay quiet and look at your phone.", 1, 1, "Socially awkward. Relationship building is 50% of the 'Hustle'."),
        answer!("Quickly ask AI: 'Summarize the key highlights of last night's IPL match for a business chat'.", 5, 5, "Just-in-time social intelligence. Using AI to bridge the 'Small Talk' gap."),
        answer!("Fake it and say 'Yeah, great game, right?'", 1, 2, "Risk of being caught. If they ask 'What about that wicket?', you're dead."),
        answer!("Tell them 'Cricket is a waste of time'.", 1, 1, "The fastest way to lose a client in India. Know your audience."),
    ]),
    question!(156, Mindset, "Theme: Strategic Vision. You realize your company's 10 years of support logs are a 'Goldmine' for AI. You:", [
        answer!("Do nothing. It's just old text.", 1, 1, "You're sitting on an 'Oil Well' and refusing to drill."),
        answer!("Propose building a 'Custom RAG' (Private AI) to train new staff 10x faster using that data.", 5, 5, "Data Moat. Converting legacy data into a modern competitive advantage."),
        answer!("Sell the data to a competitor for a quick profit.", 1, 1, "Short-sighted and probably illegal. Keep your 'Moat' to yourself."),
        answer!("Upload the whole database to a free public AI to 'See what it says'.", 1, 1, "Security Disaster. You've just leaked your company's 'Brain' to the public."),
    ]),
    question!(157, Ethics, "Theme: Workplace Ethics. You used AI to generate 90% of a report. Your boss praises your 'Hard work'. You:", [
        answer!("Say 'Thank you' and take all the credit.", 1, 1, 1, "Dishonest. You're setting an impossible standard for your future 'Human' self."),
        answer!("Say 'Thanks! I actually used AI to speed up the drafting so I could spend more time on the strategy'.", 5, 5, 5, "Radical Transparency. Redefining 'Hard Work' as 'Smart Results'."),
        answer!("Wait for someone to ask, then admit it.", 2, 3, 3, "Passive. Better to lead the conversation on AI adoption."),
        answer!("Delete the report and do it again manually to be 'Honest'.", 1, 1, 4, "Inefficient. Technology exists to be used. Just be honest about HOW you used it."),
    ]),
];
