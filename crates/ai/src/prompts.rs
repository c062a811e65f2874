//! Prompt templates.

/// Token budget for a challenge reply.
pub const CHALLENGE_MAX_TOKENS: u32 = 1000;

/// Token budget for a quiz reply.
pub const QUIZ_MAX_TOKENS: u32 = 2000;

pub fn challenge_prompt(skill_name: &str, proficiency: f64) -> String {
    format!(
        "Generate a coding challenge for skill: {skill_name}\n\
         Proficiency level: {proficiency:.0}/100\n\
         \n\
         Create a practical challenge that helps refresh this skill. Include:\n\
         1. Challenge title\n\
         2. Description (2-3 sentences)\n\
         3. Requirements (3-4 bullet points)\n\
         4. Estimated time to complete\n\
         5. Difficulty level (Easy/Medium/Hard)\n\
         \n\
         Return ONLY valid JSON with this structure:\n\
         {{\n  \
           \"title\": \"Challenge title here\",\n  \
           \"description\": \"Description here\",\n  \
           \"requirements\": [\"req1\", \"req2\", \"req3\"],\n  \
           \"estimatedTime\": \"30 minutes\",\n  \
           \"difficulty\": \"Medium\"\n\
         }}"
    )
}

pub fn quiz_prompt(skill_name: &str, count: usize) -> String {
    format!(
        "Generate {count} quiz questions for: {skill_name}\n\
         \n\
         Create multiple-choice questions that test understanding. Return ONLY \
         valid JSON (no markdown, no extra text) in this exact format:\n\
         \n\
         [\n  \
           {{\n    \
             \"question\": \"Question text here?\",\n    \
             \"options\": [\"Option A\", \"Option B\", \"Option C\", \"Option D\"],\n    \
             \"correctAnswer\": 0,\n    \
             \"explanation\": \"Explanation of the correct answer\"\n  \
           }}\n\
         ]"
    )
}
