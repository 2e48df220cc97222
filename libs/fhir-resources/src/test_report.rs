//! TestReport
//!
//! A summary of information based on the results of executing a TestScript.

use ferrum_models::builder::{BackboneBuilder, DomainResourceBuilder};
use ferrum_models::config::BuildOptions;
use ferrum_models::datatypes::{Identifier, Reference};
use ferrum_models::node::{BackboneBase, DomainResourceBase};
use ferrum_models::primitive::{Coded, DateTime, FhirDecimal, FhirString, Markdown, Uri};
use ferrum_models::rules::{finish, Checker, Validate};
use ferrum_models::schema::{
    BindingDecl, BindingStrength, Cardinality, ChoiceGroup, FieldDecl, TypeDecl, TypeKind,
};
use ferrum_models::visitor::{accept_list, accept_one, walk, Visitable, Visitor};
use ferrum_models::Result;

use crate::codes::{TestReportActionResult, TestReportParticipantType, TestReportResult, TestReportStatus};

const ACTION_RESULT_BINDING: BindingDecl = BindingDecl::new(
    "TestReportActionResult",
    BindingStrength::Required,
    "http://hl7.org/fhir/ValueSet/report-action-result-codes|4.3.0-cibuild",
);

/// An action holds either an operation or an assertion, never both.
static ACTION_CHOICE: [ChoiceGroup; 1] = [ChoiceGroup {
    first: "operation",
    second: "assert",
}];

static TEST_REPORT_FIELDS: [FieldDecl; 12] = [
    TestReport::IDENTIFIER,
    TestReport::NAME,
    TestReport::STATUS,
    TestReport::TEST_SCRIPT,
    TestReport::RESULT,
    TestReport::SCORE,
    TestReport::TESTER,
    TestReport::ISSUED,
    TestReport::PARTICIPANT,
    TestReport::SETUP,
    TestReport::TEST,
    TestReport::TEARDOWN,
];

pub static TEST_REPORT: TypeDecl =
    TypeDecl::new("TestReport", TypeKind::Resource, Some("DomainResource"), &TEST_REPORT_FIELDS);

/// Describes the results of a TestScript execution
#[derive(Debug, Clone, PartialEq)]
pub struct TestReport {
    base: DomainResourceBase,
    identifier: Option<Identifier>,
    name: Option<FhirString>,
    status: Option<Coded<TestReportStatus>>,
    test_script: Option<Reference>,
    result: Option<Coded<TestReportResult>>,
    score: Option<FhirDecimal>,
    tester: Option<FhirString>,
    issued: Option<DateTime>,
    participant: Vec<TestReportParticipant>,
    setup: Option<TestReportSetup>,
    test: Vec<TestReportTest>,
    teardown: Option<TestReportTeardown>,
}

impl TestReport {
    pub const IDENTIFIER: FieldDecl =
        FieldDecl::complex("identifier", "Identifier", Cardinality::OPTIONAL).summary();
    pub const NAME: FieldDecl = FieldDecl::primitive("name", "string", Cardinality::OPTIONAL).summary();
    pub const STATUS: FieldDecl = FieldDecl::primitive("status", "code", Cardinality::REQUIRED)
        .modifier()
        .summary()
        .bound(BindingDecl::new(
            "TestReportStatus",
            BindingStrength::Required,
            "http://hl7.org/fhir/ValueSet/report-status-codes|4.3.0-cibuild",
        ));
    pub const TEST_SCRIPT: FieldDecl =
        FieldDecl::reference("testScript", Cardinality::REQUIRED, &["TestScript"]).summary();
    pub const RESULT: FieldDecl = FieldDecl::primitive("result", "code", Cardinality::REQUIRED)
        .summary()
        .bound(BindingDecl::new(
            "TestReportResult",
            BindingStrength::Required,
            "http://hl7.org/fhir/ValueSet/report-result-codes|4.3.0-cibuild",
        ));
    pub const SCORE: FieldDecl = FieldDecl::primitive("score", "decimal", Cardinality::OPTIONAL).summary();
    pub const TESTER: FieldDecl = FieldDecl::primitive("tester", "string", Cardinality::OPTIONAL).summary();
    pub const ISSUED: FieldDecl = FieldDecl::primitive("issued", "dateTime", Cardinality::OPTIONAL).summary();
    pub const PARTICIPANT: FieldDecl =
        FieldDecl::backbone("participant", "TestReport.Participant", Cardinality::REPEATED);
    pub const SETUP: FieldDecl = FieldDecl::backbone("setup", "TestReport.Setup", Cardinality::OPTIONAL);
    pub const TEST: FieldDecl = FieldDecl::backbone("test", "TestReport.Test", Cardinality::REPEATED);
    pub const TEARDOWN: FieldDecl =
        FieldDecl::backbone("teardown", "TestReport.Teardown", Cardinality::OPTIONAL);

    pub fn builder() -> TestReportBuilder {
        TestReportBuilder::default()
    }

    pub fn to_builder(&self) -> TestReportBuilder {
        TestReportBuilder {
            base: DomainResourceBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            identifier: self.identifier.clone(),
            name: self.name.clone(),
            status: self.status.clone(),
            test_script: self.test_script.clone(),
            result: self.result.clone(),
            score: self.score.clone(),
            tester: self.tester.clone(),
            issued: self.issued.clone(),
            participant: self.participant.to_vec(),
            setup: self.setup.clone(),
            test: self.test.to_vec(),
            teardown: self.teardown.clone(),
        }
    }

    ferrum_models::node_getters! {
        one identifier: Identifier;
        one name: FhirString;
        one status: Coded<TestReportStatus>;
        one test_script: Reference;
        one result: Coded<TestReportResult>;
        one score: FhirDecimal;
        one tester: FhirString;
        one issued: DateTime;
        list participant: TestReportParticipant;
        one setup: TestReportSetup;
        list test: TestReportTest;
        one teardown: TestReportTeardown;
    }
}

ferrum_models::impl_domain_resource!(TestReport, TEST_REPORT);

impl Visitable for TestReport {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::IDENTIFIER.name, self.identifier.as_ref());
            accept_one(v, Self::NAME.name, self.name.as_ref());
            accept_one(v, Self::STATUS.name, self.status.as_ref());
            accept_one(v, Self::TEST_SCRIPT.name, self.test_script.as_ref());
            accept_one(v, Self::RESULT.name, self.result.as_ref());
            accept_one(v, Self::SCORE.name, self.score.as_ref());
            accept_one(v, Self::TESTER.name, self.tester.as_ref());
            accept_one(v, Self::ISSUED.name, self.issued.as_ref());
            accept_list(v, Self::PARTICIPANT.name, &self.participant);
            accept_one(v, Self::SETUP.name, self.setup.as_ref());
            accept_list(v, Self::TEST.name, &self.test);
            accept_one(v, Self::TEARDOWN.name, self.teardown.as_ref());
        });
    }
}

impl Validate for TestReport {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::STATUS, self.status.as_ref())?;
        c.require(&Self::TEST_SCRIPT, self.test_script.as_ref())?;
        c.require(&Self::RESULT, self.result.as_ref())?;
        c.reference(&Self::TEST_SCRIPT, self.test_script.as_ref())?;
        self.base.check(c)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReportBuilder {
    base: DomainResourceBuilder,
    options: BuildOptions,
    identifier: Option<Identifier>,
    name: Option<FhirString>,
    status: Option<Coded<TestReportStatus>>,
    test_script: Option<Reference>,
    result: Option<Coded<TestReportResult>>,
    score: Option<FhirDecimal>,
    tester: Option<FhirString>,
    issued: Option<DateTime>,
    participant: Vec<TestReportParticipant>,
    setup: Option<TestReportSetup>,
    test: Vec<TestReportTest>,
    teardown: Option<TestReportTeardown>,
}

impl TestReportBuilder {
    ferrum_models::domain_resource_builder_methods!();

    ferrum_models::builder_setters! {
        one identifier: Identifier;
        one name: FhirString;
        one status: Coded<TestReportStatus>;
        one test_script: Reference;
        one result: Coded<TestReportResult>;
        one score: FhirDecimal;
        one tester: FhirString;
        one issued: DateTime;
        list participant / replace_participant: TestReportParticipant;
        one setup: TestReportSetup;
        list test / replace_test: TestReportTest;
        one teardown: TestReportTeardown;
    }

    pub fn build(self) -> Result<TestReport> {
        let node = TestReport {
            base: self.base.freeze(),
            identifier: self.identifier,
            name: self.name,
            status: self.status,
            test_script: self.test_script,
            result: self.result,
            score: self.score,
            tester: self.tester,
            issued: self.issued,
            participant: self.participant,
            setup: self.setup,
            test: self.test,
            teardown: self.teardown,
        };
        finish(node, self.options)
    }
}

static PARTICIPANT_FIELDS: [FieldDecl; 3] = [
    TestReportParticipant::TYPE,
    TestReportParticipant::URI,
    TestReportParticipant::DISPLAY,
];

pub static TEST_REPORT_PARTICIPANT: TypeDecl = TypeDecl::new(
    "TestReport.Participant",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &PARTICIPANT_FIELDS,
);

/// A participant in the test execution, either the execution engine, a
/// client, or a server
///
/// Backbone element for TestReport.participant
#[derive(Debug, Clone, PartialEq)]
pub struct TestReportParticipant {
    base: BackboneBase,
    r#type: Option<Coded<TestReportParticipantType>>,
    uri: Option<Uri>,
    display: Option<FhirString>,
}

impl TestReportParticipant {
    pub const TYPE: FieldDecl = FieldDecl::primitive("type", "code", Cardinality::REQUIRED).bound(
        BindingDecl::new(
            "TestReportParticipantType",
            BindingStrength::Required,
            "http://hl7.org/fhir/ValueSet/report-participant-type|4.3.0-cibuild",
        ),
    );
    pub const URI: FieldDecl = FieldDecl::primitive("uri", "uri", Cardinality::REQUIRED);
    pub const DISPLAY: FieldDecl = FieldDecl::primitive("display", "string", Cardinality::OPTIONAL);

    pub fn builder() -> TestReportParticipantBuilder {
        TestReportParticipantBuilder::default()
    }

    pub fn to_builder(&self) -> TestReportParticipantBuilder {
        TestReportParticipantBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            r#type: self.r#type.clone(),
            uri: self.uri.clone(),
            display: self.display.clone(),
        }
    }

    ferrum_models::node_getters! {
        one r#type: Coded<TestReportParticipantType>;
        one uri: Uri;
        one display: FhirString;
    }
}

ferrum_models::impl_backbone!(TestReportParticipant, TEST_REPORT_PARTICIPANT);

impl Visitable for TestReportParticipant {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::TYPE.name, self.r#type.as_ref());
            accept_one(v, Self::URI.name, self.uri.as_ref());
            accept_one(v, Self::DISPLAY.name, self.display.as_ref());
        });
    }
}

impl Validate for TestReportParticipant {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::TYPE, self.r#type.as_ref())?;
        c.require(&Self::URI, self.uri.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReportParticipantBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    r#type: Option<Coded<TestReportParticipantType>>,
    uri: Option<Uri>,
    display: Option<FhirString>,
}

impl TestReportParticipantBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one r#type: Coded<TestReportParticipantType>;
        one uri: Uri;
        one display: FhirString;
    }

    pub fn build(self) -> Result<TestReportParticipant> {
        let node = TestReportParticipant {
            base: self.base.freeze(),
            r#type: self.r#type,
            uri: self.uri,
            display: self.display,
        };
        finish(node, self.options)
    }
}

static SETUP_FIELDS: [FieldDecl; 1] = [TestReportSetup::ACTION];

pub static TEST_REPORT_SETUP: TypeDecl = TypeDecl::new(
    "TestReport.Setup",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &SETUP_FIELDS,
);

/// The results of the series of required setup operations before the tests
/// were executed
///
/// Backbone element for TestReport.setup
#[derive(Debug, Clone, PartialEq)]
pub struct TestReportSetup {
    base: BackboneBase,
    action: Vec<TestReportSetupAction>,
}

impl TestReportSetup {
    pub const ACTION: FieldDecl =
        FieldDecl::backbone("action", "TestReport.Setup.Action", Cardinality::REQUIRED_REPEATED);

    pub fn builder() -> TestReportSetupBuilder {
        TestReportSetupBuilder::default()
    }

    pub fn to_builder(&self) -> TestReportSetupBuilder {
        TestReportSetupBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            action: self.action.to_vec(),
        }
    }

    ferrum_models::node_getters! {
        list action: TestReportSetupAction;
    }
}

ferrum_models::impl_backbone!(TestReportSetup, TEST_REPORT_SETUP);

impl Visitable for TestReportSetup {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_list(v, Self::ACTION.name, &self.action);
        });
    }
}

impl Validate for TestReportSetup {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require_non_empty(&Self::ACTION, &self.action)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReportSetupBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    action: Vec<TestReportSetupAction>,
}

impl TestReportSetupBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        list action / replace_action: TestReportSetupAction;
    }

    pub fn build(self) -> Result<TestReportSetup> {
        let node = TestReportSetup {
            base: self.base.freeze(),
            action: self.action,
        };
        finish(node, self.options)
    }
}

static SETUP_ACTION_FIELDS: [FieldDecl; 2] = [TestReportSetupAction::OPERATION, TestReportSetupAction::ASSERT];

pub static TEST_REPORT_SETUP_ACTION: TypeDecl = TypeDecl::new(
    "TestReport.Setup.Action",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &SETUP_ACTION_FIELDS,
)
.with_choice_groups(&ACTION_CHOICE);

/// A setup operation or assert that was executed
///
/// Backbone element for TestReport.setup.action
#[derive(Debug, Clone, PartialEq)]
pub struct TestReportSetupAction {
    base: BackboneBase,
    operation: Option<TestReportOperation>,
    assert: Option<TestReportAssert>,
}

impl TestReportSetupAction {
    pub const OPERATION: FieldDecl = FieldDecl::backbone(
        "operation",
        "TestReport.Setup.Action.Operation",
        Cardinality::OPTIONAL,
    );
    pub const ASSERT: FieldDecl =
        FieldDecl::backbone("assert", "TestReport.Setup.Action.Assert", Cardinality::OPTIONAL);

    pub fn builder() -> TestReportSetupActionBuilder {
        TestReportSetupActionBuilder::default()
    }

    pub fn to_builder(&self) -> TestReportSetupActionBuilder {
        TestReportSetupActionBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            operation: self.operation.clone(),
            assert: self.assert.clone(),
        }
    }

    ferrum_models::node_getters! {
        one operation: TestReportOperation;
        one assert: TestReportAssert;
    }
}

ferrum_models::impl_backbone!(TestReportSetupAction, TEST_REPORT_SETUP_ACTION);

impl Visitable for TestReportSetupAction {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::OPERATION.name, self.operation.as_ref());
            accept_one(v, Self::ASSERT.name, self.assert.as_ref());
        });
    }
}

impl Validate for TestReportSetupAction {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReportSetupActionBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    operation: Option<TestReportOperation>,
    assert: Option<TestReportAssert>,
}

impl TestReportSetupActionBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one operation: TestReportOperation;
        one assert: TestReportAssert;
    }

    pub fn build(self) -> Result<TestReportSetupAction> {
        let node = TestReportSetupAction {
            base: self.base.freeze(),
            operation: self.operation,
            assert: self.assert,
        };
        finish(node, self.options)
    }
}

static OPERATION_FIELDS: [FieldDecl; 3] = [
    TestReportOperation::RESULT,
    TestReportOperation::MESSAGE,
    TestReportOperation::DETAIL,
];

pub static TEST_REPORT_OPERATION: TypeDecl = TypeDecl::new(
    "TestReport.Setup.Action.Operation",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &OPERATION_FIELDS,
);

/// The operation to perform
///
/// Backbone element for TestReport.setup.action.operation, shared by
/// TestReport.test.action.operation and TestReport.teardown.action.operation
#[derive(Debug, Clone, PartialEq)]
pub struct TestReportOperation {
    base: BackboneBase,
    result: Option<Coded<TestReportActionResult>>,
    message: Option<Markdown>,
    detail: Option<Uri>,
}

impl TestReportOperation {
    pub const RESULT: FieldDecl =
        FieldDecl::primitive("result", "code", Cardinality::REQUIRED).bound(ACTION_RESULT_BINDING);
    pub const MESSAGE: FieldDecl = FieldDecl::primitive("message", "markdown", Cardinality::OPTIONAL);
    pub const DETAIL: FieldDecl = FieldDecl::primitive("detail", "uri", Cardinality::OPTIONAL);

    pub fn builder() -> TestReportOperationBuilder {
        TestReportOperationBuilder::default()
    }

    pub fn to_builder(&self) -> TestReportOperationBuilder {
        TestReportOperationBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            result: self.result.clone(),
            message: self.message.clone(),
            detail: self.detail.clone(),
        }
    }

    ferrum_models::node_getters! {
        one result: Coded<TestReportActionResult>;
        one message: Markdown;
        one detail: Uri;
    }
}

ferrum_models::impl_backbone!(TestReportOperation, TEST_REPORT_OPERATION);

impl Visitable for TestReportOperation {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::RESULT.name, self.result.as_ref());
            accept_one(v, Self::MESSAGE.name, self.message.as_ref());
            accept_one(v, Self::DETAIL.name, self.detail.as_ref());
        });
    }
}

impl Validate for TestReportOperation {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::RESULT, self.result.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReportOperationBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    result: Option<Coded<TestReportActionResult>>,
    message: Option<Markdown>,
    detail: Option<Uri>,
}

impl TestReportOperationBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one result: Coded<TestReportActionResult>;
        one message: Markdown;
        one detail: Uri;
    }

    pub fn build(self) -> Result<TestReportOperation> {
        let node = TestReportOperation {
            base: self.base.freeze(),
            result: self.result,
            message: self.message,
            detail: self.detail,
        };
        finish(node, self.options)
    }
}

static ASSERT_FIELDS: [FieldDecl; 3] = [
    TestReportAssert::RESULT,
    TestReportAssert::MESSAGE,
    TestReportAssert::DETAIL,
];

pub static TEST_REPORT_ASSERT: TypeDecl = TypeDecl::new(
    "TestReport.Setup.Action.Assert",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &ASSERT_FIELDS,
);

/// The results of the assertion performed on the previous operations
///
/// Backbone element for TestReport.setup.action.assert, shared by
/// TestReport.test.action.assert
#[derive(Debug, Clone, PartialEq)]
pub struct TestReportAssert {
    base: BackboneBase,
    result: Option<Coded<TestReportActionResult>>,
    message: Option<Markdown>,
    detail: Option<FhirString>,
}

impl TestReportAssert {
    pub const RESULT: FieldDecl =
        FieldDecl::primitive("result", "code", Cardinality::REQUIRED).bound(ACTION_RESULT_BINDING);
    pub const MESSAGE: FieldDecl = FieldDecl::primitive("message", "markdown", Cardinality::OPTIONAL);
    pub const DETAIL: FieldDecl = FieldDecl::primitive("detail", "string", Cardinality::OPTIONAL);

    pub fn builder() -> TestReportAssertBuilder {
        TestReportAssertBuilder::default()
    }

    pub fn to_builder(&self) -> TestReportAssertBuilder {
        TestReportAssertBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            result: self.result.clone(),
            message: self.message.clone(),
            detail: self.detail.clone(),
        }
    }

    ferrum_models::node_getters! {
        one result: Coded<TestReportActionResult>;
        one message: Markdown;
        one detail: FhirString;
    }
}

ferrum_models::impl_backbone!(TestReportAssert, TEST_REPORT_ASSERT);

impl Visitable for TestReportAssert {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::RESULT.name, self.result.as_ref());
            accept_one(v, Self::MESSAGE.name, self.message.as_ref());
            accept_one(v, Self::DETAIL.name, self.detail.as_ref());
        });
    }
}

impl Validate for TestReportAssert {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::RESULT, self.result.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReportAssertBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    result: Option<Coded<TestReportActionResult>>,
    message: Option<Markdown>,
    detail: Option<FhirString>,
}

impl TestReportAssertBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one result: Coded<TestReportActionResult>;
        one message: Markdown;
        one detail: FhirString;
    }

    pub fn build(self) -> Result<TestReportAssert> {
        let node = TestReportAssert {
            base: self.base.freeze(),
            result: self.result,
            message: self.message,
            detail: self.detail,
        };
        finish(node, self.options)
    }
}

static TEST_FIELDS: [FieldDecl; 3] = [TestReportTest::NAME, TestReportTest::DESCRIPTION, TestReportTest::ACTION];

pub static TEST_REPORT_TEST: TypeDecl = TypeDecl::new(
    "TestReport.Test",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &TEST_FIELDS,
);

/// A test executed from the test script
///
/// Backbone element for TestReport.test
#[derive(Debug, Clone, PartialEq)]
pub struct TestReportTest {
    base: BackboneBase,
    name: Option<FhirString>,
    description: Option<FhirString>,
    action: Vec<TestReportTestAction>,
}

impl TestReportTest {
    pub const NAME: FieldDecl = FieldDecl::primitive("name", "string", Cardinality::OPTIONAL);
    pub const DESCRIPTION: FieldDecl = FieldDecl::primitive("description", "string", Cardinality::OPTIONAL);
    pub const ACTION: FieldDecl =
        FieldDecl::backbone("action", "TestReport.Test.Action", Cardinality::REQUIRED_REPEATED);

    pub fn builder() -> TestReportTestBuilder {
        TestReportTestBuilder::default()
    }

    pub fn to_builder(&self) -> TestReportTestBuilder {
        TestReportTestBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            name: self.name.clone(),
            description: self.description.clone(),
            action: self.action.to_vec(),
        }
    }

    ferrum_models::node_getters! {
        one name: FhirString;
        one description: FhirString;
        list action: TestReportTestAction;
    }
}

ferrum_models::impl_backbone!(TestReportTest, TEST_REPORT_TEST);

impl Visitable for TestReportTest {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::NAME.name, self.name.as_ref());
            accept_one(v, Self::DESCRIPTION.name, self.description.as_ref());
            accept_list(v, Self::ACTION.name, &self.action);
        });
    }
}

impl Validate for TestReportTest {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require_non_empty(&Self::ACTION, &self.action)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReportTestBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    name: Option<FhirString>,
    description: Option<FhirString>,
    action: Vec<TestReportTestAction>,
}

impl TestReportTestBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one name: FhirString;
        one description: FhirString;
        list action / replace_action: TestReportTestAction;
    }

    pub fn build(self) -> Result<TestReportTest> {
        let node = TestReportTest {
            base: self.base.freeze(),
            name: self.name,
            description: self.description,
            action: self.action,
        };
        finish(node, self.options)
    }
}

static TEST_ACTION_FIELDS: [FieldDecl; 2] = [TestReportTestAction::OPERATION, TestReportTestAction::ASSERT];

pub static TEST_REPORT_TEST_ACTION: TypeDecl = TypeDecl::new(
    "TestReport.Test.Action",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &TEST_ACTION_FIELDS,
)
.with_choice_groups(&ACTION_CHOICE);

/// A test operation or assert that was performed
///
/// Backbone element for TestReport.test.action
#[derive(Debug, Clone, PartialEq)]
pub struct TestReportTestAction {
    base: BackboneBase,
    operation: Option<TestReportOperation>,
    assert: Option<TestReportAssert>,
}

impl TestReportTestAction {
    pub const OPERATION: FieldDecl = FieldDecl::backbone(
        "operation",
        "TestReport.Setup.Action.Operation",
        Cardinality::OPTIONAL,
    );
    pub const ASSERT: FieldDecl =
        FieldDecl::backbone("assert", "TestReport.Setup.Action.Assert", Cardinality::OPTIONAL);

    pub fn builder() -> TestReportTestActionBuilder {
        TestReportTestActionBuilder::default()
    }

    pub fn to_builder(&self) -> TestReportTestActionBuilder {
        TestReportTestActionBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            operation: self.operation.clone(),
            assert: self.assert.clone(),
        }
    }

    ferrum_models::node_getters! {
        one operation: TestReportOperation;
        one assert: TestReportAssert;
    }
}

ferrum_models::impl_backbone!(TestReportTestAction, TEST_REPORT_TEST_ACTION);

impl Visitable for TestReportTestAction {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::OPERATION.name, self.operation.as_ref());
            accept_one(v, Self::ASSERT.name, self.assert.as_ref());
        });
    }
}

impl Validate for TestReportTestAction {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReportTestActionBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    operation: Option<TestReportOperation>,
    assert: Option<TestReportAssert>,
}

impl TestReportTestActionBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one operation: TestReportOperation;
        one assert: TestReportAssert;
    }

    pub fn build(self) -> Result<TestReportTestAction> {
        let node = TestReportTestAction {
            base: self.base.freeze(),
            operation: self.operation,
            assert: self.assert,
        };
        finish(node, self.options)
    }
}

static TEARDOWN_FIELDS: [FieldDecl; 1] = [TestReportTeardown::ACTION];

pub static TEST_REPORT_TEARDOWN: TypeDecl = TypeDecl::new(
    "TestReport.Teardown",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &TEARDOWN_FIELDS,
);

/// The results of the series of operations required to clean up after all
/// the tests were executed
///
/// Backbone element for TestReport.teardown
#[derive(Debug, Clone, PartialEq)]
pub struct TestReportTeardown {
    base: BackboneBase,
    action: Vec<TestReportTeardownAction>,
}

impl TestReportTeardown {
    pub const ACTION: FieldDecl =
        FieldDecl::backbone("action", "TestReport.Teardown.Action", Cardinality::REQUIRED_REPEATED);

    pub fn builder() -> TestReportTeardownBuilder {
        TestReportTeardownBuilder::default()
    }

    pub fn to_builder(&self) -> TestReportTeardownBuilder {
        TestReportTeardownBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            action: self.action.to_vec(),
        }
    }

    ferrum_models::node_getters! {
        list action: TestReportTeardownAction;
    }
}

ferrum_models::impl_backbone!(TestReportTeardown, TEST_REPORT_TEARDOWN);

impl Visitable for TestReportTeardown {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_list(v, Self::ACTION.name, &self.action);
        });
    }
}

impl Validate for TestReportTeardown {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require_non_empty(&Self::ACTION, &self.action)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReportTeardownBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    action: Vec<TestReportTeardownAction>,
}

impl TestReportTeardownBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        list action / replace_action: TestReportTeardownAction;
    }

    pub fn build(self) -> Result<TestReportTeardown> {
        let node = TestReportTeardown {
            base: self.base.freeze(),
            action: self.action,
        };
        finish(node, self.options)
    }
}

static TEARDOWN_ACTION_FIELDS: [FieldDecl; 1] = [TestReportTeardownAction::OPERATION];

pub static TEST_REPORT_TEARDOWN_ACTION: TypeDecl = TypeDecl::new(
    "TestReport.Teardown.Action",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &TEARDOWN_ACTION_FIELDS,
);

/// One or more teardown operations performed
///
/// Backbone element for TestReport.teardown.action
#[derive(Debug, Clone, PartialEq)]
pub struct TestReportTeardownAction {
    base: BackboneBase,
    operation: Option<TestReportOperation>,
}

impl TestReportTeardownAction {
    pub const OPERATION: FieldDecl = FieldDecl::backbone(
        "operation",
        "TestReport.Setup.Action.Operation",
        Cardinality::REQUIRED,
    );

    pub fn builder() -> TestReportTeardownActionBuilder {
        TestReportTeardownActionBuilder::default()
    }

    pub fn to_builder(&self) -> TestReportTeardownActionBuilder {
        TestReportTeardownActionBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            operation: self.operation.clone(),
        }
    }

    ferrum_models::node_getters! {
        one operation: TestReportOperation;
    }
}

ferrum_models::impl_backbone!(TestReportTeardownAction, TEST_REPORT_TEARDOWN_ACTION);

impl Visitable for TestReportTeardownAction {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::OPERATION.name, self.operation.as_ref());
        });
    }
}

impl Validate for TestReportTeardownAction {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::OPERATION, self.operation.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReportTeardownActionBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    operation: Option<TestReportOperation>,
}

impl TestReportTeardownActionBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one operation: TestReportOperation;
    }

    pub fn build(self) -> Result<TestReportTeardownAction> {
        let node = TestReportTeardownAction {
            base: self.base.freeze(),
            operation: self.operation,
        };
        finish(node, self.options)
    }
}

pub(crate) fn type_decls() -> [&'static TypeDecl; 10] {
    [
        &TEST_REPORT,
        &TEST_REPORT_PARTICIPANT,
        &TEST_REPORT_SETUP,
        &TEST_REPORT_SETUP_ACTION,
        &TEST_REPORT_OPERATION,
        &TEST_REPORT_ASSERT,
        &TEST_REPORT_TEST,
        &TEST_REPORT_TEST_ACTION,
        &TEST_REPORT_TEARDOWN,
        &TEST_REPORT_TEARDOWN_ACTION,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrum_models::{Error, Node};

    fn passed() -> TestReportOperation {
        TestReportOperation::builder()
            .result(TestReportActionResult::Pass)
            .build()
            .unwrap()
    }

    fn asserted() -> TestReportAssert {
        TestReportAssert::builder()
            .result(TestReportActionResult::Warning)
            .detail(FhirString::new("response code was 201").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_action_with_operation_or_assert() {
        assert!(TestReportSetupAction::builder().operation(passed()).build().is_ok());
        assert!(TestReportTestAction::builder().assert(asserted()).build().is_ok());
    }

    #[test]
    fn test_action_with_both_is_rejected() {
        let err = TestReportSetupAction::builder()
            .operation(passed())
            .assert(asserted())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ChoiceExclusivityViolation {
                type_name: "TestReport.Setup.Action",
                first: "operation",
                second: "assert",
                reason: "both present",
            }
        ));
    }

    #[test]
    fn test_empty_action_reports_choice_before_ele1() {
        let err = TestReportTestAction::builder().build().unwrap_err();
        assert!(matches!(
            err,
            Error::ChoiceExclusivityViolation { reason: "neither present", .. }
        ));
    }

    #[test]
    fn test_setup_requires_actions() {
        let err = TestReportSetup::builder().build().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCardinality { type_name: "TestReport.Setup", ref path, .. } if path == "action"
        ));
    }

    #[test]
    fn test_teardown_action_requires_operation() {
        let err = TestReportTeardownAction::builder().build().unwrap_err();
        assert_eq!(err.path(), Some("operation"));
    }

    #[test]
    fn test_shared_operation_type_name() {
        let action = TestReportTeardownAction::builder().operation(passed()).build().unwrap();
        assert_eq!(
            action.operation().map(|o| o.type_name()),
            Some("TestReport.Setup.Action.Operation")
        );
    }
}
