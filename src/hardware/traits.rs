pub trait Led {
    type Error;

    fn on(&mut self) -> Result<(), Self::Error>;
    fn off(&mut self) -> Result<(), Self::Error>;

    fn set(&mut self, lit: bool) -> Result<(), Self::Error> {
        if lit { self.on() } else { self.off() }
    }
}

pub trait Button {
    type Error;

    fn is_pressed(&mut self) -> Result<bool, Self::Error>;

    /// Resolves on the next edge that marks a press.
    async fn wait_for_press(&mut self) -> Result<(), Self::Error>;
}
