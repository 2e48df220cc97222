//! Required value sets bound by the records in this crate

use ferrum_models::code_enum;

code_enum! {
    /// Current state of the encounter
    pub enum EncounterStatus("http://hl7.org/fhir/ValueSet/encounter-status|4.1.0") {
        Planned => "planned",
        Arrived => "arrived",
        Triaged => "triaged",
        InProgress => "in-progress",
        Onleave => "onleave",
        Finished => "finished",
        Cancelled => "cancelled",
        EnteredInError => "entered-in-error",
        Unknown => "unknown",
    }
}

code_enum! {
    /// The status of the location
    pub enum EncounterLocationStatus("http://hl7.org/fhir/ValueSet/encounter-location-status|4.1.0") {
        Planned => "planned",
        Active => "active",
        Reserved => "reserved",
        Completed => "completed",
    }
}

code_enum! {
    /// The lifecycle status of an artifact
    pub enum PublicationStatus("http://hl7.org/fhir/ValueSet/publication-status|4.0.1") {
        Draft => "draft",
        Active => "active",
        Retired => "retired",
        Unknown => "unknown",
    }
}

code_enum! {
    /// FHIR RESTful interaction used to filter a resource-based subscription trigger
    pub enum MethodCode("http://hl7.org/fhir/ValueSet/interaction-trigger|4.0.1") {
        Create => "create",
        Update => "update",
        Delete => "delete",
    }
}

code_enum! {
    /// Behavior a server can exhibit when a criteria state does not exist
    pub enum CriteriaNotExistsBehavior("http://hl7.org/fhir/ValueSet/subscriptiontopic-cr-behavior|4.0.1") {
        TestPasses => "test-passes",
        TestFails => "test-fails",
    }
}

code_enum! {
    pub enum SubscriptionTopicFilterBySearchModifier("http://hl7.org/fhir/ValueSet/subscription-search-modifier|4.0.1") {
        Equal => "=",
        Eq => "eq",
        Ne => "ne",
        Gt => "gt",
        Lt => "lt",
        Ge => "ge",
        Le => "le",
        Sa => "sa",
        Eb => "eb",
        Ap => "ap",
        Above => "above",
        Below => "below",
        In => "in",
        NotIn => "not-in",
        OfType => "of-type",
    }
}

code_enum! {
    /// The current status of the test report
    pub enum TestReportStatus("http://hl7.org/fhir/ValueSet/report-status-codes|4.3.0-cibuild") {
        Completed => "completed",
        InProgress => "in-progress",
        Waiting => "waiting",
        Stopped => "stopped",
        EnteredInError => "entered-in-error",
    }
}

code_enum! {
    /// The reported execution result
    pub enum TestReportResult("http://hl7.org/fhir/ValueSet/report-result-codes|4.3.0-cibuild") {
        Pass => "pass",
        Fail => "fail",
        Pending => "pending",
    }
}

code_enum! {
    /// The type of participant
    pub enum TestReportParticipantType("http://hl7.org/fhir/ValueSet/report-participant-type|4.3.0-cibuild") {
        TestEngine => "test-engine",
        Client => "client",
        Server => "server",
    }
}

code_enum! {
    /// The result of the execution of an individual action
    pub enum TestReportActionResult("http://hl7.org/fhir/ValueSet/report-action-result-codes|4.3.0-cibuild") {
        Pass => "pass",
        Skip => "skip",
        Fail => "fail",
        Warning => "warning",
        Error => "error",
    }
}
