pub fn run() {
    println!("{}", tokre::version_tag());
}
