use crate::primitive::{FhirDecimal, FhirString, Instant, Primitive, UnsignedInt, Uri};
use crate::r4::codesystem::{BundleType, HttpVerb, SearchEntryMode};
use crate::r4::datatypes::{Identifier, Signature};
use crate::r4::Resource;

fhir_resource! {
    /// Contains a collection of resources
    pub struct Bundle: "Bundle" {
        /// Persistent identifier for the bundle
        identifier: Option<Identifier> = "identifier",
        /// document | message | transaction | transaction-response | batch | batch-response | history | searchset | collection
        bundle_type: Primitive<BundleType> = "type" [required],
        /// When the bundle was assembled
        timestamp: Option<Instant> = "timestamp",
        /// If search, the total number of matches
        total: Option<UnsignedInt> = "total",
        /// Links related to this Bundle
        link: Vec<BundleLink> = "link",
        /// Entry in the bundle - will have a resource or information
        entry: Vec<BundleEntry> = "entry",
        /// Digital Signature
        signature: Option<Signature> = "signature",
    }
}

fhir_backbone! {
    /// Links related to this Bundle
    pub struct BundleLink {
        /// See http://www.iana.org/assignments/link-relations/link-relations.xhtml#link-relations-1
        relation: FhirString = "relation" [required],
        /// Reference details for the link
        url: Uri = "url" [required],
    }
}

fhir_backbone! {
    /// Entry in the bundle - will have a resource or information
    pub struct BundleEntry {
        /// Links related to this entry
        link: Vec<BundleLink> = "link",
        /// URI for resource (Absolute URL server address or URI for UUID/OID)
        full_url: Option<Uri> = "fullUrl",
        /// A resource in the bundle
        resource: Option<Resource> = "resource",
        /// Search related information
        search: Option<BundleEntrySearch> = "search",
        /// Additional execution information (transaction/batch/history)
        request: Option<BundleEntryRequest> = "request",
        /// Results of execution (transaction/batch/history)
        response: Option<BundleEntryResponse> = "response",
    }
}

fhir_backbone! {
    /// Search related information
    pub struct BundleEntrySearch {
        /// match | include | outcome - why this is in the result set
        mode: Option<Primitive<SearchEntryMode>> = "mode",
        /// Search ranking (between 0 and 1)
        score: Option<FhirDecimal> = "score",
    }
}

fhir_backbone! {
    /// Additional execution information (transaction/batch/history)
    pub struct BundleEntryRequest {
        /// GET | HEAD | POST | PUT | DELETE | PATCH
        method: Primitive<HttpVerb> = "method" [required],
        /// URL for HTTP equivalent of this entry
        url: Uri = "url" [required],
        /// For managing cache currency
        if_none_match: Option<FhirString> = "ifNoneMatch",
        /// For managing cache currency
        if_modified_since: Option<Instant> = "ifModifiedSince",
        /// For managing update contention
        if_match: Option<FhirString> = "ifMatch",
        /// For conditional creates
        if_none_exist: Option<FhirString> = "ifNoneExist",
    }
}

fhir_backbone! {
    /// Results of execution (transaction/batch/history)
    pub struct BundleEntryResponse {
        /// Status response code (text optional)
        status: FhirString = "status" [required],
        /// The location (if the operation returns a location)
        location: Option<Uri> = "location",
        /// The Etag for the resource (if relevant)
        etag: Option<FhirString> = "etag",
        /// Server's date time modified
        last_modified: Option<Instant> = "lastModified",
        /// OperationOutcome with hints and warnings (for batch/transaction)
        outcome: Option<Resource> = "outcome",
    }
}

impl Bundle {
    /// Resources of all entries, in entry order.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entry.iter().filter_map(|entry| entry.resource.as_ref())
    }

    pub fn find_by_full_url(&self, full_url: &str) -> Option<&Resource> {
        self.entry
            .iter()
            .find(|entry| entry.full_url.as_ref().and_then(|url| url.as_str()) == Some(full_url))
            .and_then(|entry| entry.resource.as_ref())
    }
}
