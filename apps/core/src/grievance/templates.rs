//! DPDP Act 2023 response templates.

use std::sync::{Arc, LazyLock};

use crate::models::RequestType;

const ERASURE_TEMPLATE: &str =
    "We acknowledge receipt of your request for erasure of your personal data. \
Under Section 12(1) of the Digital Personal Data Protection Act, 2023 (DPDP Act), \
you have the right to request erasure of personal data where it is no longer necessary \
for the purpose for which it was collected, or where you have withdrawn consent. \
We will process your erasure request within 90 days from the date of receipt. \
Please note that certain data may be retained where required for compliance with legal obligations, \
ongoing legal proceedings, or to establish, exercise, or defend legal claims. \
You will receive a confirmation once the erasure process is complete.";

const ACCESS_TEMPLATE: &str =
    "We acknowledge receipt of your request for access to your personal data. \
Under Section 11 of the DPDP Act, 2023, you have the right to obtain a summary of \
the personal data we hold and the processing activities undertaken. \
We will provide you with the categories of data collected, purposes of processing, \
and the data in a clear and concise format. You may request the data in PDF or JSON format. \
We will respond to your access request within 90 days from the date of receipt. \
You will receive a secure link to access your data once it is prepared.";

const CORRECTION_TEMPLATE: &str =
    "We acknowledge receipt of your request for correction of your personal data. \
Under Section 11(1)(a) of the DPDP Act, 2023, you have the right to correct inaccurate \
or incomplete personal data. To process your request, we may require supporting documentation \
to verify the corrections. We will review your submission and update our records accordingly. \
You will receive confirmation of the correction within 90 days. \
If we are unable to make the requested correction, we will provide reasons in writing.";

const PORTABILITY_TEMPLATE: &str =
    "We acknowledge receipt of your request for data portability. \
Under Section 11(1)(b) of the DPDP Act, 2023, you have the right to receive your personal data \
in a structured, commonly used, and machine-readable format. \
We will provide your data in a format that supports interoperability (e.g., JSON, CSV) \
to facilitate transfer to another data fiduciary. \
We will process your portability request within 90 days. \
You will receive a secure download link once your data package is ready.";

const OBJECTION_TEMPLATE: &str =
    "We acknowledge receipt of your objection to the processing of your personal data. \
Under the DPDP Act, 2023, you have the right to withdraw consent and object to processing \
where consent was the legal basis. Please note that withdrawal of consent does not affect \
the lawfulness of processing based on consent before its withdrawal. \
Certain processing may continue under other legal bases such as compliance with law, \
performance of a contract, or legitimate interests. \
We will cease processing for consent-based activities within 90 days. \
You will receive confirmation of the changes to our processing activities.";

/// Type whose template answers any type missing from a catalog
pub const FALLBACK_TEMPLATE_TYPE: RequestType = RequestType::Access;

static STANDARD_CATALOG: LazyLock<Arc<TemplateCatalog>> = LazyLock::new(|| {
    Arc::new(TemplateCatalog::new(vec![
        (RequestType::Erasure, ERASURE_TEMPLATE.to_string()),
        (RequestType::Access, ACCESS_TEMPLATE.to_string()),
        (RequestType::Correction, CORRECTION_TEMPLATE.to_string()),
        (RequestType::Portability, PORTABILITY_TEMPLATE.to_string()),
        (RequestType::Objection, OBJECTION_TEMPLATE.to_string()),
    ]))
});

/// Ordered response templates keyed by request type
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<(RequestType, String)>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<(RequestType, String)>) -> Self {
        Self { templates }
    }

    /// The built-in DPDP templates
    pub fn standard() -> Arc<TemplateCatalog> {
        Arc::clone(&STANDARD_CATALOG)
    }

    pub fn get(&self, request_type: RequestType) -> Option<&str> {
        self.templates
            .iter()
            .find(|(t, _)| *t == request_type)
            .map(|(_, text)| text.as_str())
    }

    /// Template for a type, or the access template when the type is missing.
    /// Empty only if the catalog has neither.
    pub fn resolve(&self, request_type: RequestType) -> &str {
        self.get(request_type)
            .or_else(|| self.get(FALLBACK_TEMPLATE_TYPE))
            .unwrap_or_default()
    }

    /// Request types with a template, in catalog order
    pub fn available_types(&self) -> Vec<RequestType> {
        self.templates.iter().map(|(t, _)| *t).collect()
    }
}
