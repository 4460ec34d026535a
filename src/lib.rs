pub mod configuration;

pub mod curve {
    pub mod curve;
    pub mod curveerror;
    pub mod curvemanager;
    pub mod curveoptions;
    pub mod curvesettings;
    pub mod easing;
    pub mod segment;
    pub mod timeband;
}

pub mod formula {
    pub mod formulaerror;
    pub mod formulatype;
    pub mod formula;
    pub mod constantformula;
    pub mod linearformula;
    pub mod quadraticformula;
    pub mod sineformula;
    pub mod formulasettings;
    pub mod formulamanager;
}

pub mod interpolation;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod linearsolver {
        pub mod cramerrule;
    }
    pub mod point;
}
