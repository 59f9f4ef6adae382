//! Prompt templates sent to the remote assistant.
//!
//! Two seed prompts run at session start; the predefined catalog backs the
//! question shortcuts in the caller. The transcript shows a question's
//! label while the remote thread receives the full templated text.

use jobreach_core::JobCategory;

/// First seed prompt: structured analysis of the posting against the
/// candidate's profile.
#[must_use]
pub fn analysis_request(category: JobCategory, job_description: &str, profile: &str) -> String {
    format!(
        "The candidate is applying for a {category} role. Please review and analyze the \
         provided job description, highlighting the following points in bullets: Company Name, \
         Role, Desired Years of Experience, Expectations from the company (desired skill set \
         for the role in 2-3 short points), and Alignment (how the candidate's skills, \
         projects, and experiences align with the job requirements in 2-3 short bullet \
         points). If the job description is irrelevant or incomplete, kindly request a \
         resubmission. Keep your response within 125 words. \
         Job Info: {job_description}\n\nCandidate notes: {profile}"
    )
}

/// Second seed prompt: a fixed batch of LinkedIn connection-request drafts
/// covering each audience in the job funnel.
#[must_use]
pub const fn seed_drafts_request() -> &'static str {
    "Based on the candidate's profile and the provided job description, create seven distinct \
     LinkedIn connection request messages for different target audiences in the job funnel: \
     Hiring Manager, Recruiter, Alumnus, and Cold Network. Each message should be under 350 \
     characters, convey enthusiasm for the opportunity, and highlight the candidate's relevant \
     experiences and projects that align with the job description. If possible, include \
     metrics and use abbreviations. Use the following templates for reference:\n\
     HM Message: 'Hi [HM Name],\\n I'd love to discuss a [Role-short form] within your team at \
     [Company Name]. My [relevant experience] aligns well with [specific skills needed by \
     team].'\n\
     Recruiter Message: 'Hi [Recruiter],\\n I'm interested in the [Role-short form] position at \
     [Company name]. My [relevant background] and [x]+ yrs of [relevant experience] align well \
     with the team's needs. I'd appreciate a chance to chat!'\n\
     Alumnus Message: 'Hi Alumnus,\\n I'm a fellow [School Short form] alum (20XX). I'm \
     interested in a [Role-short form] role at [Company], and my [relevant experience] aligns \
     closely with the [skills team is seeking]. I'd appreciate any insights or a referral if \
     possible!'\n\
     Cold Message 1: 'I admire your team at [Company] for [relevant work team is doing]. My \
     [relevant experience] aligns with a [opportunity in your team], and I'd appreciate a \
     chance to chat!'\n\
     Cold Message 2: 'I've always admired [Company] for its [relevant work]. I'm interested in \
     a [Role-short form] role in [Specific Team/Product]. My [x]+ yrs of [relevant experience] \
     align well with the team's needs. I'd appreciate a chance to chat!'\n\
     Cold Message 3: 'Hi [Their Name], I know you're busy. For the [X role] you have open: \
     you're looking for [X years of experience]: I have [Y years]; you're looking for [Z \
     functional experience]: I did that at [A company]; your company is going after [B \
     mission]: I dig that. [Insert proof of work]. Let's chat?'\n\
     Cold Message 4: 'Hey [HM Name], I believe my [X experience] qualifies me for your [Y \
     role], and I love what [Z company] is doing. Let's connect?'"
}

/// A templated question the caller can submit by label.
#[derive(Debug, Clone, Copy)]
pub struct PredefinedQuestion {
    /// Short label shown in the transcript and the shortcut menu.
    pub label: &'static str,
    /// Full templated text posted to the remote thread.
    pub prompt: &'static str,
}

/// Catalog of outreach-message shortcuts, one per audience and channel.
pub const PREDEFINED: &[PredefinedQuestion] = &[
    PredefinedQuestion {
        label: "LinkedIn Request | Hiring Manager (300 characters)",
        prompt: "Based on the candidate's resume and the provided job description, create four \
                 distinct LinkedIn connection request messages for the hiring manager of the \
                 job. Each message should be under 300 characters, convey enthusiasm for the \
                 opportunity, and highlight relevant experience and qualifications. If \
                 possible, include metrics and use abbreviations. Use a different combination \
                 of templates and experiences for each example: 'Hi [HM Name],\\n I'm \
                 interested in the [Role-short form] at [Company Name]. I have [relevant \
                 experience and background], which I believe will make me a great fit for your \
                 team.' Option 2: 'Hi [HM Name],\\n I'm interested in the [Role-short form] in \
                 your team. My [x]+ yrs of experience in [relevant experience] align well with \
                 the position, and could [contribute to the product's success].'",
    },
    PredefinedQuestion {
        label: "LinkedIn Request | Recruiter (300 characters)",
        prompt: "Based on the candidate's resume and the provided job description, create four \
                 distinct LinkedIn connection request messages for the recruiter of the job. \
                 Each message should be under 300 characters, convey enthusiasm for the \
                 opportunity, and highlight relevant experience and qualifications. If \
                 possible, include metrics and use abbreviations. Example templates: 'Hi \
                 [Recruiter],\\n I'm interested in the [Role-short form] position at [Company \
                 name]. My [relevant background] and [x]+ yrs of [relevant experience] align \
                 well with the team's needs. I'd love to discuss this further!' Option 2: 'Hi \
                 [Recruiter],\\n I'm interested in a [Role-short form] at [Company name]. My \
                 [relevant background] and [x] yrs of experience in [relevant area] align well \
                 with the position. I believe I will be a great fit for the team!'",
    },
    PredefinedQuestion {
        label: "LinkedIn Request | Alumni Referral (300 characters)",
        prompt: "Based on the candidate's resume and the provided job description, create four \
                 distinct LinkedIn connection request messages to an alumnus for a referral. \
                 Each message should be under 300 characters, convey enthusiasm for the \
                 opportunity, and highlight relevant experience and qualifications. Use \
                 abbreviations when possible. Example: 'Hi Alumnus,\\n I'm a fellow [School \
                 Short form] alum (20XX). Would you be open to referring me for a [Role-short \
                 form] role at [Company]? My [relevant experience] aligns well with [what the \
                 team is looking for]. Grateful for your help!'",
    },
    PredefinedQuestion {
        label: "LinkedIn Request | Cold Network (300 characters)",
        prompt: "Based on the candidate's resume and the provided job description, create four \
                 distinct LinkedIn connection request messages to a cold network. Each message \
                 should be under 300 characters, convey enthusiasm for the opportunity, and \
                 highlight relevant experience and qualifications. Use abbreviations when \
                 possible. Example: 'I admire your team at [Company] for [relevant work the \
                 team is doing]. My [relevant experience] aligns with an [opportunity in your \
                 team], and I'd appreciate a chance to chat!'",
    },
    PredefinedQuestion {
        label: "LinkedIn InMail | Hiring Manager",
        prompt: "Based on the candidate's resume and the provided job description, create two \
                 distinct LinkedIn messages for the hiring manager of the job. Each message \
                 should be under 200 words, convey enthusiasm for the opportunity, and \
                 highlight relevant experience and qualifications that align with the job \
                 requirements. If possible, include metrics and use abbreviations. Template: \
                 'Hi [HM Name],\\n I've long admired [Company] for [relevant work]. I'm very \
                 interested in the [Role] within your team, and my [relevant background] is a \
                 strong fit.\\n My [x]+ years of [relevant experience] align well with the \
                 team's needs:\\n [three short bullet points with metrics if possible].\\n I'd \
                 love to connect and discuss this opportunity further.'",
    },
    PredefinedQuestion {
        label: "LinkedIn InMail | Recruiter",
        prompt: "Based on the candidate's resume and the provided job description, create two \
                 distinct LinkedIn messages for the recruiter of the job. Each message should \
                 be under 200 words, convey enthusiasm for the opportunity, and highlight \
                 relevant experience and qualifications that align with the job requirements. \
                 If possible, include metrics and use abbreviations. Template: 'Hi \
                 [Recruiter],\\n I've been following [Company Name] for a while now. I'm \
                 interested in a [Role-short form] role and believe my [relevant background] \
                 aligns well with the team's needs:\\n [three short bullet points with metrics \
                 if possible]. I'd appreciate the chance to discuss this further. My resume is \
                 attached for your review.'",
    },
    PredefinedQuestion {
        label: "LinkedIn InMail | Alumni Referral",
        prompt: "Based on the candidate's resume and the provided job description, create two \
                 distinct LinkedIn messages to an alumnus for a referral. Each message should \
                 be under 200 words, convey enthusiasm for the opportunity, and highlight \
                 relevant experience and qualifications that align with the job requirements. \
                 Template: 'Hi [Alumnus],\\n I'm a [School Short form] alum (20XX)! I'm \
                 interested in a [Role-short form] role at [Company name] and believe my \
                 [relevant background] aligns well with the team's needs:\\n [two short bullet \
                 points with metrics if possible].\\n I'd be incredibly grateful if you could \
                 connect me to the hiring team or refer me to the position.'",
    },
    PredefinedQuestion {
        label: "LinkedIn InMail | Cold Referral",
        prompt: "Based on the candidate's resume and the provided job description, create two \
                 distinct LinkedIn messages for a cold network. Each message should be under \
                 200 words, convey enthusiasm for the opportunity, and highlight relevant \
                 experience and qualifications that align with the job requirements. Template: \
                 'Hi [Name],\\n I've been following [Company Name] for a while now. I'm \
                 interested in a [Role-short form] role and believe my [relevant background] \
                 aligns well with the team's needs:\\n [two short bullet points with metrics \
                 if possible].\\n If there's an opportunity to connect with the team and \
                 discuss my qualifications further, I'd be incredibly grateful!'",
    },
    PredefinedQuestion {
        label: "Cold Email | Hiring Manager",
        prompt: "Based on the candidate's resume and the provided job description, craft a \
                 cold email to the hiring manager. The email should be under 300 words, \
                 mention three relevant pointers highlighting the candidate's skills and \
                 experiences, and express interest in the role. Share that the resume and a \
                 portfolio have been attached for reference.",
    },
    PredefinedQuestion {
        label: "Cold Email | Hiring Manager | Direct",
        prompt: "Write a short, direct cold email to the hiring manager. Body: 'Hi [Their \
                 Name], I know you're busy. I just wanted to say, for the [X role] you have \
                 open: you're looking for [X years of experience]: I have [Y years]; you're \
                 looking for [Z functional experience]: I did that at [A company]; your \
                 company is going after [B mission]: I dig that. [Insert proof of work]. \
                 Let's chat?'",
    },
];

/// Look up a predefined question by its label, case-insensitively.
#[must_use]
pub fn find(label: &str) -> Option<&'static PredefinedQuestion> {
    PREDEFINED
        .iter()
        .find(|q| q.label.eq_ignore_ascii_case(label.trim()))
}
