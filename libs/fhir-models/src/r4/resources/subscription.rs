use crate::primitive::{Code, FhirString, Instant, Primitive, Url};
use crate::r4::codesystem::{SubscriptionChannelType, SubscriptionStatus};
use crate::r4::datatypes::ContactPoint;

fhir_domain_resource! {
    /// Server push subscription criteria
    pub struct Subscription: "Subscription" {
        /// requested | active | error | off
        status: Primitive<SubscriptionStatus> = "status" [required],
        /// Contact details for source (e.g. troubleshooting)
        contact: Vec<ContactPoint> = "contact",
        /// When to automatically delete the subscription
        end: Option<Instant> = "end",
        /// Description of why this subscription was created
        reason: FhirString = "reason" [required],
        /// Rule for server push
        criteria: FhirString = "criteria" [required],
        /// Latest error note
        error: Option<FhirString> = "error",
        /// The channel on which to report matches to the criteria
        channel: SubscriptionChannel = "channel" [required],
    }
}

fhir_backbone! {
    /// The channel on which to report matches to the criteria
    pub struct SubscriptionChannel {
        /// rest-hook | websocket | email | sms | message
        channel_type: Primitive<SubscriptionChannelType> = "type" [required],
        /// Where the channel points to
        endpoint: Option<Url> = "endpoint",
        /// MIME type to send, or omit for no payload
        payload: Option<Code> = "payload",
        /// Usage depends on the channel type
        header: Vec<FhirString> = "header",
    }
}
