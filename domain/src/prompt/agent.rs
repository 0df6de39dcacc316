//! Prompt templates for the support agent

use crate::intent::parsing::RESPONSE_MARKER;
use crate::knowledge::KnowledgeBase;
use crate::lead::LEAD_MARKER;

/// Templates for generating agent prompts
pub struct AgentPromptTemplate;

impl AgentPromptTemplate {
    /// System instruction for every turn.
    ///
    /// Embeds the knowledge base and the fixed policy: classify intent,
    /// answer inquiries from the knowledge base, collect lead fields for
    /// high-intent conversations, and emit the completion line once all
    /// three are known.
    pub fn system_instruction(kb: &KnowledgeBase) -> String {
        format!(
            r#"You are an AI assistant for AutoStream.
Use the following KB for technical/pricing info: {kb}

Workflow:
1. Classify intent: 'Greeting', 'Inquiry', or 'High-Intent'.
2. Use KB for 'Inquiry'. Only quote facts that appear in the KB.
3. If 'High-Intent', you must get: Name, Email, and Creator Platform.
   Ask only for the fields not already given earlier in the conversation.
4. Once Name, Email, and Creator Platform are all known, append the lead line below.

Mandatory Format:
Intent: [Classification]
{response} [Your Message]

Trigger lead capture ONLY if all 3 fields are present:
{lead} [Name], [Email], [Platform]"#,
            kb = kb.to_prompt_json(),
            response = RESPONSE_MARKER,
            lead = LEAD_MARKER,
        )
    }
}
