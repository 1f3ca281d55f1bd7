//! Claim-decomposition judgment prompt.
//!
//! The wording fixes three things the metric depends on: how claims are
//! decomposed (atomic, decontextualized propositions), how golden claims
//! are matched against candidate claims (exact values for specific
//! facts), and the JSON object the backend must return. The six field
//! names are the wire contract parsed in `types.rs`.

pub fn build_judgment_prompt(question: &str, golden_response: &str, candidate_response: &str) -> String {
    format!(
        r#"Given the following question:

### Start Question:
{question}
End Question

and a golden response and a candidate response respectively.

### Start Golden Response:
{golden_response}
End Golden Response

### Start Candidate Response:
{candidate_response}
End Candidate Response

### Evaluate the two responses using the Evaluation Method below.
The responses could be numerical, specific (e.g., names or dates), or descriptive.

### Evaluation Method:
1. Create a list of individual claims that can be inferred from the golden response with respect to the question.
2. Create a list of individual claims that can be inferred from the candidate response with respect to the question.
3. Calculate the total number of claims of the golden response present in the candidate response based on the following rules:
    - the complete statement of each claim in the golden response should be checked against the complete statement of each claim in the candidate response.
    - If the golden response claim is specific in nature, like numerical values, names or dates, then the candidate response claim must contain the exact value present in the golden response.

### For creating the individual claims follow these instructions:
 - Decompose the content into clear and simple propositions, ensuring they are interpretable out of context.
 - Split compound sentences into simple sentences. Maintain the original phrasing from the input whenever possible.
 - For any named entity that is accompanied by additional descriptive information, separate this information into its own distinct proposition.
 - Decontextualize each proposition by adding necessary modifiers to nouns or entire sentences and replacing pronouns (e.g., "it", "he", "she", "they", "this", "that") with the full name of the entities they refer to.

### After creating the lists, perform the following:
1. In the golden response claims, if any claim can be directly inferred from the question, only then remove it from the list.
2. In the candidate response claims, if any claim can be directly inferred from the question, only then remove it from the list.

### The final output should contain the explanation of the evaluation method and the numerical values in the following json format:

{{
    Golden Response Claims: {{ <list of claims from the golden response> }}
    Candidate Response Claims: {{ <list of claims from the candidate response> }}
    Common Claims: {{ <list of claims from the golden response present in the candidate> }}
    No of Golden Response Claims: <value>
    No of Candidate Response Claims: <value>
    No of Common Claims: <value>
}}

### Example:
{{
    "Golden Response Claims": {{
                                    "1": "The Mac line includes laptops.",
                                    "2": "The laptops mentioned are MacBook Air and MacBook Pro.",
                                    "3": "The Mac line includes desktops.",
                                    "4": "The desktops mentioned are iMac, Mac mini, Mac Studio, and Mac Pro."
                                }},
    "Candidate Response Claims": {{
                                    "1": "The company's line of personal computers is called Mac.",
                                    "2": "The Mac line includes laptops.",
                                    "3": "The laptops included are MacBook Air and MacBook Pro.",
                                    "4": "The Mac line includes desktops.",
                                    "5": "The desktops included are iMac, Mac mini, Mac Studio, and Mac Pro."
                                }},
    "No of Golden Response Claims": 4,
    "No of Candidate Response Claims": 5,
    "No of Common Claims": 4
}}

### Please strictly adhere to the json format specified above. Please provide the complete response
in json format.
"#
    )
}
